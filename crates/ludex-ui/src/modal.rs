//! Modal overlay building blocks
//!
//! Modals render as a dimmed full-window overlay with a centered panel.
//! The pieces are plain builders; the owning view decides what goes inside
//! and when the overlay exists at all.

use gpui::prelude::FluentBuilder;
use gpui::{
    App, ClickEvent, Div, InteractiveElement, IntoElement, ParentElement, SharedString,
    Stateful, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::button::{Button, ButtonVariants};
use crate::icon::IconName;
use crate::styled::{h_flex, v_flex};
use crate::theme::ActiveTheme;

/// Full-window dimmed backdrop. Occludes everything behind it.
pub fn modal_overlay(cx: &App) -> Stateful<Div> {
    div()
        .id("modal-overlay")
        .absolute()
        .inset_0()
        .occlude()
        .bg(cx.theme().overlay)
        .flex()
        .items_center()
        .justify_center()
}

/// The centered panel container.
pub fn modal_panel(width: f32, cx: &App) -> Div {
    let theme = cx.theme();
    v_flex()
        .w(px(width))
        .max_h(px(620.))
        .rounded(theme.radius_lg)
        .border_1()
        .border_color(theme.border)
        .bg(theme.background)
        .shadow_lg()
        .overflow_hidden()
}

/// Title row with a close button.
pub fn modal_header(
    title: impl Into<SharedString>,
    on_close: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    cx: &App,
) -> impl IntoElement {
    let theme = cx.theme();
    h_flex()
        .w_full()
        .px_4()
        .py_3()
        .justify_between()
        .border_b_1()
        .border_color(theme.border)
        .child(
            div()
                .text_size(px(15.))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(theme.foreground)
                .child(title.into()),
        )
        .child(
            Button::new("modal-close")
                .icon(IconName::X)
                .ghost()
                .on_click(on_close),
        )
}

/// Right-aligned footer row for action buttons, with an optional inline
/// error message on the left.
pub fn modal_footer(error: Option<SharedString>, cx: &App) -> Div {
    let theme = cx.theme();
    h_flex()
        .w_full()
        .px_4()
        .py_3()
        .gap_2()
        .justify_end()
        .border_t_1()
        .border_color(theme.border)
        .when_some(error, |this, error| {
            this.child(
                div()
                    .flex_1()
                    .text_size(px(12.))
                    .text_color(theme.danger)
                    .child(error),
            )
        })
}
