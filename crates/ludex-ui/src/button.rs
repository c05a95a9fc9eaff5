//! Button widget

use gpui::prelude::FluentBuilder;
use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, px,
};

use crate::icon::{Icon, IconName};
use crate::styled::{Disableable, Sizable, Size, h_flex};
use crate::theme::ActiveTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Secondary,
    Primary,
    Ghost,
    Outline,
    Danger,
}

/// Variant shorthands shared by every call site.
pub trait ButtonVariants: Sized {
    fn with_variant(self, variant: ButtonVariant) -> Self;

    fn primary(self) -> Self {
        self.with_variant(ButtonVariant::Primary)
    }

    fn ghost(self) -> Self {
        self.with_variant(ButtonVariant::Ghost)
    }

    fn outline(self) -> Self {
        self.with_variant(ButtonVariant::Outline)
    }

    fn danger(self) -> Self {
        self.with_variant(ButtonVariant::Danger)
    }
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    icon: Option<IconName>,
    variant: ButtonVariant,
    size: Size,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            icon: None,
            variant: ButtonVariant::default(),
            size: Size::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl ButtonVariants for Button {
    fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl Disableable for Button {
    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Sizable for Button {
    fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let transparent = gpui::transparent_black();
        let (bg, fg, hover_bg) = match self.variant {
            ButtonVariant::Primary => (theme.primary, theme.primary_foreground, theme.primary_hover),
            ButtonVariant::Secondary => (theme.secondary, theme.foreground, theme.secondary_active),
            ButtonVariant::Ghost => (transparent, theme.foreground, theme.secondary),
            ButtonVariant::Outline => (transparent, theme.foreground, theme.secondary),
            ButtonVariant::Danger => (theme.danger, theme.danger_foreground, theme.danger),
        };

        let (height, padding_x, text_size) = match self.size {
            Size::XSmall => (px(22.), px(4.), px(11.)),
            Size::Small => (px(26.), px(8.), px(12.)),
            Size::Medium => (px(30.), px(12.), px(13.)),
        };

        let icon_color = if self.disabled {
            theme.muted_foreground
        } else {
            fg
        };

        h_flex()
            .id(self.id)
            .h(height)
            .px(padding_x)
            .gap_1()
            .justify_center()
            .flex_shrink_0()
            .rounded(theme.radius)
            .bg(bg)
            .text_size(text_size)
            .text_color(icon_color)
            .when(self.variant == ButtonVariant::Outline, |this| {
                this.border_1().border_color(theme.border)
            })
            .when(self.disabled, |this| this.opacity(0.5))
            .when(!self.disabled, |this| {
                let secondary_active = theme.secondary_active;
                this.cursor_pointer()
                    .hover(move |style| style.bg(hover_bg))
                    .active(move |style| style.bg(secondary_active))
            })
            .when_some(self.icon, |this, icon| {
                this.child(Icon::new(icon).size_4().text_color(icon_color))
            })
            .when_some(self.label, |this, label| this.child(label))
            .when_some(
                self.on_click.filter(|_| !self.disabled),
                |this, on_click| {
                    this.on_click(move |event, window, cx| {
                        on_click(event, window, cx);
                    })
                },
            )
    }
}
