//! Catalogue entity records
//!
//! These are the records served by the platform API, deserialized as-is
//! (camelCase wire names). The table layer treats them uniformly through
//! the [`EntityRow`] trait: a numeric id, a human label, and a per-column
//! display value keyed by the column's wire name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminant selecting which forms, hooks and action set a table wires
/// up for its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Game,
    Article,
    Platform,
    Genre,
    Developer,
}

impl EntityKind {
    /// The REST collection path for this kind (`games`, `articles`, ...).
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Game => "games",
            Self::Article => "articles",
            Self::Platform => "platforms",
            Self::Genre => "genres",
            Self::Developer => "developers",
        }
    }

    /// Human section title used by the management pages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Game => "Games",
            Self::Article => "Articles",
            Self::Platform => "Platforms",
            Self::Genre => "Genres",
            Self::Developer => "Developers",
        }
    }

    /// Singular noun for dialog copy ("Delete game?").
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Article => "article",
            Self::Platform => "platform",
            Self::Genre => "genre",
            Self::Developer => "developer",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.singular())
    }
}

/// Uniform row contract the table orchestrator relies on.
///
/// Rows are displayed read-only and replaced wholesale on every fetch;
/// mutation happens only through the entity forms.
pub trait EntityRow: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> i64;

    /// Short human label for confirmations ("Delete 'Outer Wilds'?").
    fn label(&self) -> String;

    /// Display text for the column with the given wire key. Unknown keys
    /// render empty rather than panicking; a column key typo shows up as a
    /// blank column, same as the platform's web client.
    fn cell(&self, key: &str) -> String;

    /// The id of the row's cover image, for kinds that have one.
    fn cover_id(&self) -> Option<i64> {
        None
    }

    /// Publication state, for kinds with a publish workflow.
    fn published(&self) -> Option<bool> {
        None
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_date(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub cover_id: Option<i64>,
    #[serde(default)]
    pub developer_id: Option<i64>,
    #[serde(default)]
    pub developer_name: Option<String>,
    #[serde(default)]
    pub platform_ids: Vec<i64>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub rating: Option<f32>,
}

impl EntityRow for Game {
    const KIND: EntityKind = EntityKind::Game;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "id" => self.id.to_string(),
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "releaseYear" => self
                .release_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            "developer" => self.developer_name.clone().unwrap_or_default(),
            "platformIds" => join_ids(&self.platform_ids),
            "genreIds" => join_ids(&self.genre_ids),
            "rating" => self.rating.map(|r| format!("{r:.1}")).unwrap_or_default(),
            "coverId" => self
                .cover_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn cover_id(&self) -> Option<i64> {
        self.cover_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cover_id: Option<i64>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub game_ids: Vec<i64>,
    #[serde(default)]
    pub author: Option<String>,
}

impl EntityRow for Article {
    const KIND: EntityKind = EntityKind::Article;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "id" => self.id.to_string(),
            "title" => self.title.clone(),
            "summary" => self.summary.clone(),
            "author" => self.author.clone().unwrap_or_default(),
            "published" => if self.published { "Published" } else { "Draft" }.to_string(),
            "publishedAt" => format_date(&self.published_at),
            "scheduledAt" => format_date(&self.scheduled_at),
            "coverId" => self
                .cover_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn cover_id(&self) -> Option<i64> {
        self.cover_id
    }

    fn published(&self) -> Option<bool> {
        Some(self.published)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
}

impl EntityRow for Platform {
    const KIND: EntityKind = EntityKind::Platform;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "manufacturer" => self.manufacturer.clone().unwrap_or_default(),
            "releaseYear" => self
                .release_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl EntityRow for Genre {
    const KIND: EntityKind = EntityKind::Genre;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub founded_year: Option<i32>,
}

impl EntityRow for Developer {
    const KIND: EntityKind = EntityKind::Developer;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "country" => self.country.clone().unwrap_or_default(),
            "foundedYear" => self
                .founded_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

/// An image attached to a game's gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameImage {
    pub id: i64,
    pub game_id: i64,
    pub filename: String,
}

/// An image attached to an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleImage {
    pub id: i64,
    pub article_id: i64,
    pub filename: String,
}

/// Whether a collection entry is owned or wished for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    Owned,
    Wished,
}

impl CollectionStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Owned => "Owned",
            Self::Wished => "Wishlist",
        }
    }
}

/// One game in the signed-in user's personal collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    pub id: i64,
    pub game: Game,
    pub status: CollectionStatus,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_cells_render_by_wire_key() {
        let game = Game {
            id: 7,
            title: "Chrono Trigger".into(),
            description: String::new(),
            release_year: Some(1995),
            cover_id: Some(42),
            developer_id: Some(3),
            developer_name: Some("Square".into()),
            platform_ids: vec![1, 4],
            genre_ids: vec![],
            rating: Some(9.6),
        };

        assert_eq!(game.cell("title"), "Chrono Trigger");
        assert_eq!(game.cell("releaseYear"), "1995");
        assert_eq!(game.cell("platformIds"), "1, 4");
        assert_eq!(game.cell("rating"), "9.6");
        assert_eq!(game.cell("developer"), "Square");
        // Unknown keys render blank, never panic.
        assert_eq!(game.cell("nonsense"), "");
        assert_eq!(game.cover_id(), Some(42));
    }

    #[test]
    fn article_published_cell_is_human_readable() {
        let article: Article = serde_json::from_str(
            r#"{"id":1,"title":"Review","published":true,"gameIds":[2]}"#,
        )
        .unwrap();
        assert_eq!(article.cell("published"), "Published");
        assert_eq!(article.game_ids, vec![2]);
    }

    #[test]
    fn entity_kind_endpoints() {
        assert_eq!(EntityKind::Game.endpoint(), "games");
        assert_eq!(EntityKind::Article.endpoint(), "articles");
        assert_eq!(EntityKind::Platform.endpoint(), "platforms");
        assert_eq!(EntityKind::Genre.endpoint(), "genres");
        assert_eq!(EntityKind::Developer.endpoint(), "developers");
    }

    #[test]
    fn collection_entry_round_trips() {
        let json = r#"{
            "id": 5,
            "game": {"id": 9, "title": "Hades"},
            "status": "owned"
        }"#;
        let entry: CollectionEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, CollectionStatus::Owned);
        assert_eq!(entry.game.title, "Hades");
    }
}
