//! Per-kind row action sets

use ludex_core::{EntityKind, EntityRow};
use ludex_ui::IconName;

/// An action button on a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Gallery,
    Schedule,
    Publish,
    Unpublish,
}

impl RowAction {
    pub fn icon(&self) -> IconName {
        match self {
            Self::View => IconName::Eye,
            Self::Edit => IconName::Pencil,
            Self::Delete => IconName::Trash,
            Self::Gallery => IconName::Image,
            Self::Schedule => IconName::Calendar,
            Self::Publish => IconName::Globe,
            Self::Unpublish => IconName::GlobeOff,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Gallery => "Gallery",
            Self::Schedule => "Schedule",
            Self::Publish => "Publish",
            Self::Unpublish => "Unpublish",
        }
    }
}

/// The action buttons for one row, in display order.
///
/// Pure function of the kind and the row's publication state: articles
/// swap publish/schedule for unpublish once published; games add the
/// gallery; the taxonomy kinds only edit and delete.
pub fn actions_for<T: EntityRow>(row: &T) -> Vec<RowAction> {
    match T::KIND {
        EntityKind::Game => vec![
            RowAction::View,
            RowAction::Edit,
            RowAction::Gallery,
            RowAction::Delete,
        ],
        EntityKind::Article => {
            let mut actions = vec![RowAction::View, RowAction::Edit];
            if row.published() == Some(true) {
                actions.push(RowAction::Unpublish);
            } else {
                actions.push(RowAction::Schedule);
                actions.push(RowAction::Publish);
            }
            actions.push(RowAction::Delete);
            actions
        }
        EntityKind::Platform | EntityKind::Genre | EntityKind::Developer => {
            vec![RowAction::Edit, RowAction::Delete]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludex_core::{Article, Developer, Game, Genre, Platform};

    fn game() -> Game {
        serde_json::from_str(r#"{"id":1,"title":"Hades"}"#).unwrap()
    }

    fn article(published: bool) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": 2, "title": "Review", "published": published
        }))
        .unwrap()
    }

    #[test]
    fn game_rows_expose_gallery() {
        let actions = actions_for(&game());
        assert!(actions.contains(&RowAction::Gallery));
        assert!(actions.contains(&RowAction::View));
        assert!(!actions.contains(&RowAction::Publish));
    }

    #[test]
    fn draft_article_offers_schedule_and_publish() {
        let actions = actions_for(&article(false));
        assert!(actions.contains(&RowAction::Schedule));
        assert!(actions.contains(&RowAction::Publish));
        assert!(!actions.contains(&RowAction::Unpublish));
    }

    #[test]
    fn published_article_offers_only_unpublish() {
        let actions = actions_for(&article(true));
        assert!(actions.contains(&RowAction::Unpublish));
        assert!(!actions.contains(&RowAction::Publish));
        assert!(!actions.contains(&RowAction::Schedule));
    }

    #[test]
    fn taxonomy_kinds_only_edit_and_delete() {
        let platform: Platform =
            serde_json::from_str(r#"{"id":3,"name":"Switch"}"#).unwrap();
        let genre: Genre = serde_json::from_str(r#"{"id":4,"name":"RPG"}"#).unwrap();
        let developer: Developer =
            serde_json::from_str(r#"{"id":5,"name":"Supergiant"}"#).unwrap();

        for actions in [
            actions_for(&platform),
            actions_for(&genre),
            actions_for(&developer),
        ] {
            assert_eq!(actions, vec![RowAction::Edit, RowAction::Delete]);
        }
    }

    #[test]
    fn delete_is_always_last() {
        assert_eq!(actions_for(&game()).last(), Some(&RowAction::Delete));
        assert_eq!(actions_for(&article(true)).last(), Some(&RowAction::Delete));
    }
}
