//! Checkbox widget

use gpui::prelude::FluentBuilder;
use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::icon::{Icon, IconName};
use crate::styled::{Disableable, h_flex};
use crate::theme::ActiveTheme;

type CheckHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_click: Option<CheckHandler>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            disabled: false,
            on_click: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&bool, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl Disableable for Checkbox {
    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let checked = self.checked;

        let box_bg = if checked {
            theme.primary
        } else {
            theme.background
        };
        let box_border = if checked { theme.primary } else { theme.border };
        let check_color = theme.primary_foreground;

        h_flex()
            .id(self.id)
            .gap_2()
            .text_size(px(13.))
            .text_color(theme.foreground)
            .when(self.disabled, |this| this.opacity(0.5))
            .when(!self.disabled, |this| this.cursor_pointer())
            .child(
                div()
                    .size(px(14.))
                    .flex_shrink_0()
                    .rounded(px(3.))
                    .border_1()
                    .border_color(box_border)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(checked, |this| {
                        this.child(Icon::new(IconName::Check).size_3().text_color(check_color))
                    }),
            )
            .when_some(self.label, |this, label| this.child(label))
            .when_some(
                self.on_click.filter(|_| !self.disabled),
                |this, on_click| {
                    this.on_click(move |_, window, cx| {
                        on_click(&!checked, window, cx);
                    })
                },
            )
    }
}
