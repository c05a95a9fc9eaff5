//! Layout helpers and shared widget traits

use gpui::{Div, Styled as _, div};

/// A horizontal flex container with vertically centered items.
pub fn h_flex() -> Div {
    div().flex().flex_row().items_center()
}

/// A vertical flex container.
pub fn v_flex() -> Div {
    div().flex().flex_col()
}

/// Widgets that can be rendered in a disabled state.
pub trait Disableable {
    fn disabled(self, disabled: bool) -> Self;
}

/// Widget sizing steps shared by buttons and inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    XSmall,
    Small,
    #[default]
    Medium,
}

pub trait Sizable: Sized {
    fn with_size(self, size: Size) -> Self;

    fn xsmall(self) -> Self {
        self.with_size(Size::XSmall)
    }

    fn small(self) -> Self {
        self.with_size(Size::Small)
    }
}
