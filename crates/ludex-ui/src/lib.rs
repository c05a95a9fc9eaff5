//! Ludex UI widgets
//!
//! Shared theme and widget kit for the Ludex client. Widgets follow the
//! builder-pattern `RenderOnce` style; stateful controls (text input,
//! select) are GPUI entities.

mod assets;
mod button;
mod checkbox;
mod icon;
mod input;
mod modal;
mod select;
mod styled;
pub mod theme;

pub use assets::Assets;
pub use button::{Button, ButtonVariant, ButtonVariants};
pub use checkbox::Checkbox;
pub use icon::{Icon, IconName};
pub use input::{InputEvent, TextInputState};
pub use modal::{modal_footer, modal_header, modal_overlay, modal_panel};
pub use select::{SelectEvent, SelectOption, SelectState};
pub use styled::{Disableable, Sizable, Size, h_flex, v_flex};
pub use theme::{ActiveTheme, Theme, ThemeMode};

use gpui::App;

/// Initialize the widget system
pub fn init(cx: &mut App) {
    theme::init(cx);
}
