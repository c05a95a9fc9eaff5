//! Filter packages
//!
//! A filter package is the per-entity bundle of: default filter values, a
//! total/idempotent normalization (`apply`), and the mapping from filter
//! key to UI control. The table orchestrator owns the filter *state*;
//! packages own what the controls look like and how keys compose.

mod bar;
mod package;
mod packages;

pub use bar::{FilterBar, FilterBarEvent};
pub use package::{FilterControlCx, FilterOptions, FilterPackage};
pub use packages::{
    ArticleFilters, DeveloperFilters, GameFilters, GenreFilters, PlatformFilters, package_for,
};
