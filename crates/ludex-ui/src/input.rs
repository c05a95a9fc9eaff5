//! Single-line / multi-line text input
//!
//! A deliberately small input: a string buffer driven by key events. It
//! covers the search boxes, form fields and chat composer; rich editing
//! (selection, IME composition) is out of scope for this client.

use gpui::prelude::FluentBuilder;
use gpui::{
    App, Context, EventEmitter, FocusHandle, Focusable, InteractiveElement, IntoElement,
    KeyDownEvent, MouseButton, ParentElement, Render, SharedString, Styled, Window, div, px,
};

use crate::theme::ActiveTheme;

/// Events emitted by [`TextInputState`].
#[derive(Clone, Debug)]
pub enum InputEvent {
    /// The buffer changed through user input.
    Changed(String),
    /// Enter was pressed on a single-line input.
    Submitted(String),
}

pub struct TextInputState {
    focus_handle: FocusHandle,
    value: String,
    placeholder: SharedString,
    multiline: bool,
}

impl TextInputState {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            value: String::new(),
            placeholder: SharedString::default(),
            multiline: false,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the buffer without emitting a change event. Used when a form
    /// opens with an existing record.
    pub fn set_value(&mut self, value: impl Into<String>, cx: &mut Context<Self>) {
        self.value = value.into();
        cx.notify();
    }

    pub fn clear(&mut self, cx: &mut Context<Self>) {
        self.value.clear();
        cx.notify();
    }

    pub fn focus(&self, window: &mut Window) {
        window.focus(&self.focus_handle);
    }

    fn emit_changed(&mut self, cx: &mut Context<Self>) {
        cx.emit(InputEvent::Changed(self.value.clone()));
        cx.notify();
    }

    fn on_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.platform || keystroke.modifiers.control {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => {
                if self.value.pop().is_some() {
                    self.emit_changed(cx);
                }
            }
            "enter" => {
                if self.multiline {
                    self.value.push('\n');
                    self.emit_changed(cx);
                } else {
                    cx.emit(InputEvent::Submitted(self.value.clone()));
                }
            }
            "space" => {
                self.value.push(' ');
                self.emit_changed(cx);
            }
            _ => {
                if let Some(key_char) = &keystroke.key_char {
                    self.value.push_str(key_char);
                    self.emit_changed(cx);
                }
            }
        }
    }
}

impl Focusable for TextInputState {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl EventEmitter<InputEvent> for TextInputState {}

impl Render for TextInputState {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let focused = self.focus_handle.is_focused(window);
        let empty = self.value.is_empty();

        let border = if focused { theme.primary } else { theme.border };
        let text_color = if empty {
            theme.muted_foreground
        } else {
            theme.foreground
        };
        let text: SharedString = if empty {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };

        div()
            .id("text-input")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _, window, _| {
                    window.focus(&this.focus_handle);
                }),
            )
            .w_full()
            .px_2()
            .py_1()
            .rounded(theme.radius)
            .border_1()
            .border_color(border)
            .bg(theme.background)
            .text_size(px(13.))
            .text_color(text_color)
            .map(|this| {
                if self.multiline {
                    this.min_h(px(72.))
                } else {
                    this.h(px(28.)).whitespace_nowrap().overflow_hidden()
                }
            })
            .child(text)
    }
}
