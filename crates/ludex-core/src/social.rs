//! Social records: profiles, friend requests, conversations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub avatar_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    pub id: i64,
    pub sender: UserProfile,
    pub status: RequestStatus,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

/// A conversation summary as listed by the messaging endpoint. The chat
/// panel re-fetches this list on a fixed interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: i64,
    pub friend: UserProfile,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub body: String,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_defaults_apply() {
        let convo: Conversation = serde_json::from_str(
            r#"{"id":1,"friend":{"id":2,"username":"sam"}}"#,
        )
        .unwrap();
        assert_eq!(convo.unread_count, 0);
        assert!(convo.last_message.is_none());
    }

    #[test]
    fn request_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Pending).unwrap(),
            r#""pending""#
        );
        assert_eq!(
            serde_json::from_str::<RequestStatus>(r#""accepted""#).unwrap(),
            RequestStatus::Accepted
        );
    }
}
