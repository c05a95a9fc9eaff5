//! Single-choice dropdown
//!
//! Options carry a string value and a display label; callers map ids
//! through `to_string`/`parse`. The open list renders as an absolutely
//! positioned panel below the trigger.

use gpui::prelude::FluentBuilder;
use gpui::{
    App, Context, EventEmitter, FocusHandle, Focusable, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::icon::{Icon, IconName};
use crate::styled::{h_flex, v_flex};
use crate::theme::ActiveTheme;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: SharedString,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum SelectEvent {
    /// The user picked an option; `None` is the cleared state.
    Picked(Option<SharedString>),
}

pub struct SelectState {
    focus_handle: FocusHandle,
    placeholder: SharedString,
    options: Vec<SelectOption>,
    selected: Option<SharedString>,
    /// When set, the list gains a leading "clear" row emitting `None`.
    clearable: bool,
    open: bool,
}

impl SelectState {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            placeholder: SharedString::from("Select..."),
            options: Vec::new(),
            selected: None,
            clearable: false,
            open: false,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>, cx: &mut Context<Self>) {
        self.options = options;
        cx.notify();
    }

    pub fn selected(&self) -> Option<&SharedString> {
        self.selected.as_ref()
    }

    /// Set the selection without emitting, for form prefill.
    pub fn set_selected(&mut self, value: Option<SharedString>, cx: &mut Context<Self>) {
        self.selected = value;
        cx.notify();
    }

    fn pick(&mut self, value: Option<SharedString>, cx: &mut Context<Self>) {
        self.selected = value.clone();
        self.open = false;
        cx.emit(SelectEvent::Picked(value));
        cx.notify();
    }

    fn toggle_open(&mut self, cx: &mut Context<Self>) {
        self.open = !self.open;
        cx.notify();
    }

    fn selected_label(&self) -> Option<SharedString> {
        let selected = self.selected.as_ref()?;
        self.options
            .iter()
            .find(|option| &option.value == selected)
            .map(|option| option.label.clone())
    }
}

impl Focusable for SelectState {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl EventEmitter<SelectEvent> for SelectState {}

impl Render for SelectState {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let label = self.selected_label();
        let is_placeholder = label.is_none();
        let text = label.unwrap_or_else(|| self.placeholder.clone());

        let trigger_text_color = if is_placeholder {
            theme.muted_foreground
        } else {
            theme.foreground
        };

        div()
            .relative()
            .w_full()
            .child(
                h_flex()
                    .id("select-trigger")
                    .w_full()
                    .h(px(28.))
                    .px_2()
                    .justify_between()
                    .rounded(theme.radius)
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.background)
                    .text_size(px(13.))
                    .text_color(trigger_text_color)
                    .cursor_pointer()
                    .on_click(cx.listener(|this, _, _, cx| this.toggle_open(cx)))
                    .child(text)
                    .child(
                        Icon::new(IconName::ChevronDown)
                            .size_3()
                            .text_color(theme.muted_foreground),
                    ),
            )
            .when(self.open, |this| {
                let mut list = v_flex()
                    .id("select-list")
                    .absolute()
                    .top(px(30.))
                    .left_0()
                    .right_0()
                    .max_h(px(220.))
                    .overflow_y_scroll()
                    .rounded(theme.radius)
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.background)
                    .occlude();

                if self.clearable {
                    list = list.child(
                        div()
                            .id("select-clear")
                            .px_2()
                            .py_1()
                            .text_size(px(13.))
                            .text_color(theme.muted_foreground)
                            .cursor_pointer()
                            .hover(|style| style.bg(cx.theme().secondary))
                            .on_click(cx.listener(|this, _, _, cx| this.pick(None, cx)))
                            .child("(none)"),
                    );
                }

                for (ix, option) in self.options.clone().into_iter().enumerate() {
                    let value = option.value.clone();
                    let is_selected = self.selected.as_ref() == Some(&option.value);
                    list = list.child(
                        div()
                            .id(("select-option", ix))
                            .px_2()
                            .py_1()
                            .text_size(px(13.))
                            .text_color(theme.foreground)
                            .cursor_pointer()
                            .when(is_selected, |this| this.bg(theme.secondary_active))
                            .hover(|style| style.bg(cx.theme().secondary))
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.pick(Some(value.clone()), cx);
                            }))
                            .child(option.label.clone()),
                    );
                }

                this.child(list)
            })
    }
}
