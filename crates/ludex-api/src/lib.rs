//! Ludex API service layer
//!
//! This crate provides the service layer between the UI and the remote
//! catalogue platform. Services orchestrate REST calls and return plain
//! domain records; the UI never touches HTTP directly.
//!
//! # Architecture
//!
//! ```text
//! UI Layer (ludex-app, ludex-table, ludex-forms)
//!     ↓
//! Service Layer (this crate): EntityService, MediaService, SocialService, ...
//!     ↓
//! Transport (this crate): Transport trait, HttpTransport over reqwest
//!     ↓
//! Remote REST API
//! ```
//!
//! # Design Principles
//!
//! 1. **No UI dependencies** - services never import GPUI or UI types
//! 2. **Injected transport** - every service takes an `Arc<dyn Transport>`,
//!    so tests run against an in-memory fake
//! 3. **One page at a time** - list calls return a [`ludex_core::Page`];
//!    callers re-fetch after mutations instead of patching local state

mod error;
pub mod payloads;
pub mod runtime;
mod services;
mod store;
mod transport;

pub use error::{ApiError, ApiResult};
pub use services::{
    ArticleService, AuthService, CollectionService, EntityService, MediaService, Session,
    SocialService, UploadOutcome,
};
pub use store::EntityStore;
pub use transport::{FilePart, HttpTransport, Transport};
