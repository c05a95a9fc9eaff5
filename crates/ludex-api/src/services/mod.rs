//! Services over the REST transport

mod auth;
mod catalog;
mod collection;
mod media;
mod social;

#[cfg(test)]
mod tests;

pub use auth::{AuthService, Session};
pub use catalog::{ArticleService, EntityService};
pub use collection::CollectionService;
pub use media::{MediaService, UploadOutcome};
pub use social::SocialService;
