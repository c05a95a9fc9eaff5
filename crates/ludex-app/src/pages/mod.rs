//! Application pages

mod articles;
mod collection;
mod games;
mod social;
mod taxonomy;

pub use articles::ArticlesPage;
pub use collection::CollectionPage;
pub use games::GamesPage;
pub use social::SocialPage;
pub use taxonomy::{DevelopersPage, GenresPage, PlatformsPage};
