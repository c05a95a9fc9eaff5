//! Theme system
//!
//! A single global [`Theme`] holds every color the widgets use, reachable
//! from any render path through [`ActiveTheme`]. Two built-in palettes
//! (dark default, light) cover the client; per-user theme files are out of
//! scope.

use gpui::{App, Global, Hsla, Pixels, SharedString, hsla, px};
use serde::{Deserialize, Serialize};

pub fn init(cx: &mut App) {
    tracing::info!("Initializing theme system");
    cx.set_global(Theme::new(ThemeMode::Dark));
}

pub trait ActiveTheme {
    fn theme(&self) -> &Theme;
}

impl ActiveTheme for App {
    #[inline(always)]
    fn theme(&self) -> &Theme {
        Theme::global(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// `hsla` with CSS-style ranges (0-360 hue, 0-100 saturation/lightness).
fn hsl(h: f32, s: f32, l: f32) -> Hsla {
    hsla(h / 360., s / 100., l / 100., 1.)
}

/// The global theme configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,

    pub background: Hsla,
    pub foreground: Hsla,
    pub muted: Hsla,
    pub muted_foreground: Hsla,
    pub border: Hsla,

    pub primary: Hsla,
    pub primary_hover: Hsla,
    pub primary_foreground: Hsla,
    pub secondary: Hsla,
    pub secondary_active: Hsla,
    pub danger: Hsla,
    pub danger_foreground: Hsla,

    pub table: Hsla,
    pub table_head_foreground: Hsla,
    pub table_row_border: Hsla,
    pub table_active: Hsla,
    pub table_active_border: Hsla,
    pub tab_bar: Hsla,
    pub overlay: Hsla,

    /// Radius for the general elements.
    pub radius: Pixels,
    /// Radius for the large elements, e.g. dialog border radius.
    pub radius_lg: Pixels,

    /// The font family for the application, default is `.SystemUIFont`.
    pub font_family: SharedString,
    /// The base font size for the application.
    pub font_size: Pixels,
}

impl Global for Theme {}

impl Theme {
    /// Returns the global theme reference
    #[inline(always)]
    pub fn global(cx: &App) -> &Theme {
        cx.global::<Theme>()
    }

    pub fn new(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: hsl(222., 14., 10.),
            foreground: hsl(220., 14., 90.),
            muted: hsl(222., 12., 16.),
            muted_foreground: hsl(220., 9., 55.),
            border: hsl(222., 10., 22.),
            primary: hsl(262., 70., 58.),
            primary_hover: hsl(262., 70., 64.),
            primary_foreground: hsl(0., 0., 100.),
            secondary: hsl(222., 12., 20.),
            secondary_active: hsl(222., 12., 26.),
            danger: hsl(0., 68., 52.),
            danger_foreground: hsl(0., 0., 100.),
            table: hsl(222., 14., 11.),
            table_head_foreground: hsl(220., 9., 60.),
            table_row_border: hsl(222., 10., 17.),
            table_active: hsl(262., 40., 24.),
            table_active_border: hsl(262., 60., 50.),
            tab_bar: hsl(222., 14., 8.),
            overlay: hsla(0., 0., 0., 0.55),
            radius: px(4.),
            radius_lg: px(8.),
            font_family: ".SystemUIFont".into(),
            font_size: px(14.),
        }
    }

    fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: hsl(0., 0., 100.),
            foreground: hsl(222., 20., 12.),
            muted: hsl(220., 14., 96.),
            muted_foreground: hsl(220., 9., 45.),
            border: hsl(220., 13., 88.),
            primary: hsl(262., 70., 50.),
            primary_hover: hsl(262., 70., 44.),
            primary_foreground: hsl(0., 0., 100.),
            secondary: hsl(220., 14., 94.),
            secondary_active: hsl(220., 14., 88.),
            danger: hsl(0., 72., 46.),
            danger_foreground: hsl(0., 0., 100.),
            table: hsl(0., 0., 100.),
            table_head_foreground: hsl(220., 9., 40.),
            table_row_border: hsl(220., 13., 92.),
            table_active: hsl(262., 70., 94.),
            table_active_border: hsl(262., 70., 60.),
            tab_bar: hsl(220., 14., 97.),
            overlay: hsla(0., 0., 0., 0.35),
            radius: px(4.),
            radius_lg: px(8.),
            font_family: ".SystemUIFont".into(),
            font_size: px(14.),
        }
    }
}
