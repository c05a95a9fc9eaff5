//! SVG icons

use gpui::{
    App, Hsla, IntoElement, Pixels, RenderOnce, SharedString, Styled, Svg, Window, px, svg,
};

use crate::theme::ActiveTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    ArrowLeft,
    ArrowRight,
    Calendar,
    Check,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    ChevronsUpDown,
    Eye,
    Globe,
    GlobeOff,
    Image,
    Pencil,
    Plus,
    Search,
    Send,
    SortAscending,
    SortDescending,
    Trash,
    User,
    X,
}

impl IconName {
    pub fn path(&self) -> SharedString {
        let path = match self {
            Self::ArrowLeft => "icons/arrow-left.svg",
            Self::ArrowRight => "icons/arrow-right.svg",
            Self::Calendar => "icons/calendar.svg",
            Self::Check => "icons/check.svg",
            Self::ChevronDown => "icons/chevron-down.svg",
            Self::ChevronLeft => "icons/chevron-left.svg",
            Self::ChevronRight => "icons/chevron-right.svg",
            Self::ChevronsUpDown => "icons/chevrons-up-down.svg",
            Self::Eye => "icons/eye.svg",
            Self::Globe => "icons/globe.svg",
            Self::GlobeOff => "icons/globe-off.svg",
            Self::Image => "icons/image.svg",
            Self::Pencil => "icons/pencil.svg",
            Self::Plus => "icons/plus.svg",
            Self::Search => "icons/search.svg",
            Self::Send => "icons/send.svg",
            Self::SortAscending => "icons/sort-ascending.svg",
            Self::SortDescending => "icons/sort-descending.svg",
            Self::Trash => "icons/trash.svg",
            Self::User => "icons/user.svg",
            Self::X => "icons/x.svg",
        };
        SharedString::from(path)
    }
}

#[derive(IntoElement)]
pub struct Icon {
    name: IconName,
    size: Pixels,
    color: Option<Hsla>,
}

impl Icon {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: px(16.),
            color: None,
        }
    }

    pub fn size_3(mut self) -> Self {
        self.size = px(12.);
        self
    }

    pub fn size_4(mut self) -> Self {
        self.size = px(16.);
        self
    }

    pub fn size_5(mut self) -> Self {
        self.size = px(20.);
        self
    }

    pub fn text_color(mut self, color: Hsla) -> Self {
        self.color = Some(color);
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let color = self.color.unwrap_or(cx.theme().foreground);
        icon_svg(self.name)
            .size(self.size)
            .flex_none()
            .text_color(color)
    }
}

fn icon_svg(name: IconName) -> Svg {
    svg().path(name.path())
}
