//! Request payloads for create/update calls
//!
//! Mutation endpoints accept the entity minus its server-assigned fields.
//! Forms build these drafts and hand them to the services; the returned
//! record is discarded in favor of a full refetch.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_id: Option<i64>,
    pub platform_ids: Vec<i64>,
    pub genre_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub game_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreDraft {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePayload {
    pub scheduled_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_draft_serializes_camel_case_and_skips_unset_options() {
        let draft = GameDraft {
            title: "Celeste".into(),
            description: String::new(),
            release_year: Some(2018),
            developer_id: None,
            platform_ids: vec![1],
            genre_ids: vec![],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["title"], "Celeste");
        assert_eq!(json["releaseYear"], 2018);
        assert!(json.get("developerId").is_none());
        assert_eq!(json["platformIds"], serde_json::json!([1]));
    }
}
