//! Read-only detail modal
//!
//! The view action shows the row's fields without edit affordances. The
//! field list is built by the caller, so one component serves every kind.

use gpui::{
    Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, px,
};
use ludex_ui::{ActiveTheme, h_flex, modal_header, modal_overlay, modal_panel, v_flex};

use crate::FormEvent;

pub struct DetailView {
    title: SharedString,
    fields: Vec<(SharedString, SharedString)>,
}

impl DetailView {
    pub fn new(
        title: impl Into<SharedString>,
        fields: Vec<(SharedString, SharedString)>,
    ) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

impl gpui::EventEmitter<FormEvent> for DetailView {}

impl Render for DetailView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        let mut content = v_flex().px_4().py_3().gap_2().w_full();
        for (label, value) in &self.fields {
            content = content.child(
                h_flex()
                    .w_full()
                    .gap_2()
                    .items_start()
                    .child(
                        div()
                            .w(px(120.))
                            .flex_shrink_0()
                            .text_size(px(12.))
                            .text_color(theme.muted_foreground)
                            .child(label.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(13.))
                            .text_color(theme.foreground)
                            .child(value.clone()),
                    ),
            );
        }

        modal_overlay(cx).child(
            modal_panel(480., cx)
                .child(modal_header(
                    self.title.clone(),
                    cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed)),
                    cx,
                ))
                .child(content),
        )
    }
}
