//! Entity form modals
//!
//! Every form renders its own overlay and reports back through
//! [`FormEvent`]: `Closed` when dismissed, `Saved` after a successful
//! mutation. The table orchestrator never looks inside a form; it reacts
//! to the events with its own close/refetch side effects.

mod article_form;
mod article_images;
mod common;
mod detail;
mod gallery;
mod game_form;
mod publish_dialog;
mod schedule_dialog;
mod taxonomy_forms;

pub use article_form::ArticleForm;
pub use article_images::{CoverChoice, ImageReconciler, ReconcilePlan};
pub use common::CatalogOptions;
pub use detail::DetailView;
pub use gallery::GameGallery;
pub use game_form::GameForm;
pub use publish_dialog::PublishDialog;
pub use schedule_dialog::ScheduleDialog;
pub use taxonomy_forms::{DeveloperForm, GenreForm, PlatformForm};

/// Events every form emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// The form was dismissed without a (further) mutation.
    Closed,
    /// A mutation succeeded; listeners should refetch.
    Saved,
}
