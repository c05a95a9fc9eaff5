//! The concrete filter packages

use std::sync::Arc;

use gpui::{AnyElement, App, Window};
use ludex_core::{EntityKind, FilterState, FilterValue};

use crate::package::{FilterControlCx, FilterPackage};

fn text_default() -> FilterValue {
    FilterValue::Text(String::new())
}

/// Games filter: free text, platform/genre multi-select, release-year range.
pub struct GameFilters;

impl FilterPackage for GameFilters {
    fn kind(&self) -> EntityKind {
        EntityKind::Game
    }

    fn defaults(&self) -> FilterState {
        FilterState::new()
            .with("search", text_default())
            .with("platformIds", FilterValue::Ids(Vec::new()))
            .with("genreIds", FilterValue::Ids(Vec::new()))
            .with(
                "releaseYear",
                FilterValue::YearRange {
                    from: None,
                    to: None,
                },
            )
    }

    fn renderable_keys(&self) -> &'static [&'static str] {
        &["search", "platformIds", "genreIds", "releaseYear"]
    }

    fn render_control(
        &self,
        key: &str,
        ctx: &FilterControlCx,
        _window: &mut Window,
        cx: &mut App,
    ) -> Option<AnyElement> {
        match key {
            "search" => ctx.text_input(key),
            "platformIds" => Some(ctx.id_chips(key, &ctx.options.platforms, cx)),
            "genreIds" => Some(ctx.id_chips(key, &ctx.options.genres, cx)),
            "releaseYear" => ctx.year_range(key, cx),
            _ => None,
        }
    }
}

/// Articles filter: free text plus a publication tri-state.
pub struct ArticleFilters;

impl FilterPackage for ArticleFilters {
    fn kind(&self) -> EntityKind {
        EntityKind::Article
    }

    fn defaults(&self) -> FilterState {
        FilterState::new()
            .with("search", text_default())
            .with("published", FilterValue::Flag(None))
    }

    fn renderable_keys(&self) -> &'static [&'static str] {
        &["search", "published"]
    }

    fn render_control(
        &self,
        key: &str,
        ctx: &FilterControlCx,
        _window: &mut Window,
        cx: &mut App,
    ) -> Option<AnyElement> {
        match key {
            "search" => ctx.text_input(key),
            "published" => Some(ctx.flag_cycle(key, ("All", "Published", "Drafts"), cx)),
            _ => None,
        }
    }
}

/// Platforms filter: free text plus manufacturer text.
pub struct PlatformFilters;

impl FilterPackage for PlatformFilters {
    fn kind(&self) -> EntityKind {
        EntityKind::Platform
    }

    fn defaults(&self) -> FilterState {
        FilterState::new()
            .with("search", text_default())
            .with("manufacturer", text_default())
    }

    fn renderable_keys(&self) -> &'static [&'static str] {
        &["search", "manufacturer"]
    }

    fn render_control(
        &self,
        key: &str,
        ctx: &FilterControlCx,
        _window: &mut Window,
        _cx: &mut App,
    ) -> Option<AnyElement> {
        match key {
            "search" | "manufacturer" => ctx.text_input(key),
            _ => None,
        }
    }
}

/// Genres filter: free text only; no clear button by design.
pub struct GenreFilters;

impl FilterPackage for GenreFilters {
    fn kind(&self) -> EntityKind {
        EntityKind::Genre
    }

    fn defaults(&self) -> FilterState {
        FilterState::new().with("search", text_default())
    }

    fn renderable_keys(&self) -> &'static [&'static str] {
        &["search"]
    }

    fn supports_clear(&self) -> bool {
        false
    }

    fn render_control(
        &self,
        key: &str,
        ctx: &FilterControlCx,
        _window: &mut Window,
        _cx: &mut App,
    ) -> Option<AnyElement> {
        match key {
            "search" => ctx.text_input(key),
            _ => None,
        }
    }
}

/// Developers filter: free text plus country text.
pub struct DeveloperFilters;

impl FilterPackage for DeveloperFilters {
    fn kind(&self) -> EntityKind {
        EntityKind::Developer
    }

    fn defaults(&self) -> FilterState {
        FilterState::new()
            .with("search", text_default())
            .with("country", text_default())
    }

    fn renderable_keys(&self) -> &'static [&'static str] {
        &["search", "country"]
    }

    fn render_control(
        &self,
        key: &str,
        ctx: &FilterControlCx,
        _window: &mut Window,
        _cx: &mut App,
    ) -> Option<AnyElement> {
        match key {
            "search" | "country" => ctx.text_input(key),
            _ => None,
        }
    }
}

/// The package for an entity kind.
pub fn package_for(kind: EntityKind) -> Arc<dyn FilterPackage> {
    match kind {
        EntityKind::Game => Arc::new(GameFilters),
        EntityKind::Article => Arc::new(ArticleFilters),
        EntityKind::Platform => Arc::new(PlatformFilters),
        EntityKind::Genre => Arc::new(GenreFilters),
        EntityKind::Developer => Arc::new(DeveloperFilters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_packages() -> Vec<Arc<dyn FilterPackage>> {
        vec![
            Arc::new(GameFilters),
            Arc::new(ArticleFilters),
            Arc::new(PlatformFilters),
            Arc::new(GenreFilters),
            Arc::new(DeveloperFilters),
        ]
    }

    #[test]
    fn apply_on_empty_state_yields_every_declared_key() {
        for package in all_packages() {
            let applied = package.apply(&FilterState::new());
            let defaults = package.defaults();
            assert_eq!(
                applied.len(),
                defaults.len(),
                "{:?} apply({{}}) must populate every key",
                package.kind()
            );
            for key in defaults.keys() {
                assert!(
                    applied.get(key).is_some(),
                    "{:?} missing key {key}",
                    package.kind()
                );
            }
        }
    }

    #[test]
    fn apply_is_idempotent() {
        for package in all_packages() {
            let partial = FilterState::new().with("search", FilterValue::Text("zelda".into()));
            let once = package.apply(&partial);
            let twice = package.apply(&once);
            assert_eq!(once, twice, "{:?} apply must be idempotent", package.kind());
        }
    }

    #[test]
    fn apply_preserves_known_values_and_drops_unknown_keys() {
        let package = GameFilters;
        let partial = FilterState::new()
            .with("search", FilterValue::Text("mario".into()))
            .with("platformIds", FilterValue::Ids(vec![1, 2]))
            .with("bogusKey", FilterValue::Text("x".into()));

        let applied = package.apply(&partial);
        assert_eq!(
            applied.get("search"),
            Some(&FilterValue::Text("mario".into()))
        );
        assert_eq!(
            applied.get("platformIds"),
            Some(&FilterValue::Ids(vec![1, 2]))
        );
        assert!(applied.get("bogusKey").is_none());
        // Untouched keys come back as defaults, never missing.
        assert_eq!(
            applied.get("releaseYear"),
            Some(&FilterValue::YearRange {
                from: None,
                to: None
            })
        );
    }

    #[test]
    fn every_declared_key_has_a_control() {
        for package in all_packages() {
            let renderable = package.renderable_keys();
            for key in package.defaults().keys() {
                assert!(
                    renderable.contains(&key),
                    "{:?} declares unrenderable key {key}",
                    package.kind()
                );
            }
        }
    }

    #[test]
    fn clear_support_is_per_package_policy() {
        assert!(GameFilters.supports_clear());
        assert!(!GenreFilters.supports_clear());
    }

    #[test]
    fn package_for_covers_every_kind() {
        for kind in [
            EntityKind::Game,
            EntityKind::Article,
            EntityKind::Platform,
            EntityKind::Genre,
            EntityKind::Developer,
        ] {
            assert_eq!(package_for(kind).kind(), kind);
        }
    }
}
