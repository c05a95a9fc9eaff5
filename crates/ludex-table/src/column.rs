//! Column definitions

use gpui::{AnyElement, App, Pixels, SharedString, Window, px};
use ludex_core::EntityRow;

/// A table column supplied by the page that instantiates the table.
///
/// The actions column is synthesized by the orchestrator and always
/// appended last; callers never declare it. A column keyed `coverId` has
/// its renderer overridden by the orchestrator to the cover thumbnail,
/// whatever `render` says.
pub struct Column<T> {
    pub key: &'static str,
    pub label: SharedString,
    pub sortable: bool,
    pub width: Pixels,
    pub render: Option<Box<dyn Fn(&T, &mut Window, &mut App) -> AnyElement>>,
}

impl<T: EntityRow> Column<T> {
    pub fn new(key: &'static str, label: impl Into<SharedString>) -> Self {
        Self {
            key,
            label: label.into(),
            sortable: false,
            width: px(140.),
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: Pixels) -> Self {
        self.width = width;
        self
    }

    pub fn render(
        mut self,
        render: impl Fn(&T, &mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        self.render = Some(Box::new(render));
        self
    }
}
