//! Ludex core domain layer
//!
//! This crate holds everything the rest of the workspace agrees on: the
//! domain records served by the catalogue API, the list-query model that
//! drives every paginated listing, and the core error type.
//!
//! # Architecture
//!
//! ```text
//! UI Layer (ludex-app, ludex-table, ludex-forms)
//!     ↓
//! Service Layer (ludex-api)
//!     ↓
//! Domain Layer (ludex-core) ← This crate
//! ```
//!
//! Nothing in here touches the network or the UI framework; records are
//! plain serde types and the query model is a pure state machine.

mod entity;
mod error;
mod page;
mod query;
mod social;

pub use entity::{
    Article, ArticleImage, CollectionEntry, CollectionStatus, Developer, EntityKind, EntityRow,
    Game, GameImage, Genre, Platform,
};
pub use error::{LudexError, Result};
pub use page::Page;
pub use query::{FilterState, FilterValue, ListQuery, QueryPatch, SortOrder};
pub use social::{ChatMessage, Conversation, FriendRequest, RequestStatus, UserProfile};
