//! Filter bar
//!
//! One bar per table. The bar owns the normalized [`FilterState`] plus the
//! text-input entities the packages bind to, and emits a change event per
//! key mutation. The table orchestrator reacts by merging the change into
//! its query (which resets the page) and refetching.

use std::collections::HashMap;
use std::sync::Arc;

use gpui::prelude::FluentBuilder;
use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, px,
};
use ludex_core::{FilterState, FilterValue};
use ludex_ui::{Button, ButtonVariants, Disableable, InputEvent, Sizable, TextInputState, h_flex};

use crate::package::{FilterControlCx, FilterOptions, FilterPackage};

/// Events emitted by [`FilterBar`].
#[derive(Clone, Debug)]
pub enum FilterBarEvent {
    /// One filter key changed value.
    Changed(String, FilterValue),
}

pub struct FilterBar {
    package: Arc<dyn FilterPackage>,
    state: FilterState,
    options: FilterOptions,
    text_inputs: HashMap<String, Entity<TextInputState>>,
    _subscriptions: Vec<Subscription>,
}

impl FilterBar {
    pub fn new(package: Arc<dyn FilterPackage>, cx: &mut Context<Self>) -> Self {
        let state = package.apply(&FilterState::new());
        let mut text_inputs = HashMap::new();
        let mut subscriptions = Vec::new();

        for (key, value) in state.iter() {
            match value {
                FilterValue::Text(_) => {
                    let input = cx.new(|cx| {
                        TextInputState::new(cx).placeholder(placeholder_for(key))
                    });
                    let subscribed_key = key.to_string();
                    subscriptions.push(cx.subscribe(
                        &input,
                        move |this: &mut Self, _, event: &InputEvent, cx| {
                            if let InputEvent::Changed(text) = event {
                                this.set_value(
                                    &subscribed_key,
                                    FilterValue::Text(text.clone()),
                                    cx,
                                );
                            }
                        },
                    ));
                    text_inputs.insert(key.to_string(), input);
                }
                FilterValue::YearRange { .. } => {
                    for bound in ["from", "to"] {
                        let input = cx.new(|cx| {
                            TextInputState::new(cx).placeholder(if bound == "from" {
                                "From"
                            } else {
                                "To"
                            })
                        });
                        let base = key.to_string();
                        let is_from = bound == "from";
                        subscriptions.push(cx.subscribe(
                            &input,
                            move |this: &mut Self, _, event: &InputEvent, cx| {
                                if let InputEvent::Changed(text) = event {
                                    this.year_bound_changed(&base, is_from, text, cx);
                                }
                            },
                        ));
                        text_inputs.insert(format!("{key}__{bound}"), input);
                    }
                }
                FilterValue::Ids(_) | FilterValue::Flag(_) => {}
            }
        }

        Self {
            package,
            state,
            options: FilterOptions::default(),
            text_inputs,
            _subscriptions: subscriptions,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_options(&mut self, options: FilterOptions, cx: &mut Context<Self>) {
        self.options = options;
        cx.notify();
    }

    /// Merge one key's new value and broadcast the change.
    pub fn set_value(&mut self, key: &str, value: FilterValue, cx: &mut Context<Self>) {
        self.state.set(key, value.clone());
        tracing::debug!(key, "filter changed");
        cx.emit(FilterBarEvent::Changed(key.to_string(), value));
        cx.notify();
    }

    fn year_bound_changed(
        &mut self,
        key: &str,
        is_from: bool,
        text: &str,
        cx: &mut Context<Self>,
    ) {
        let parsed = text.trim().parse::<i32>().ok();
        let (mut from, mut to) = match self.state.get(key) {
            Some(FilterValue::YearRange { from, to }) => (*from, *to),
            _ => (None, None),
        };
        if is_from {
            from = parsed;
        } else {
            to = parsed;
        }
        self.set_value(key, FilterValue::YearRange { from, to }, cx);
    }

    /// Reset every key to its default. Per the package contract this emits
    /// one change per key, so downstream query state lands on page 1.
    pub fn clear_all(&mut self, cx: &mut Context<Self>) {
        let defaults = self.package.defaults();
        for (key, value) in defaults.iter() {
            self.set_value(key, value.clone(), cx);
        }
        for input in self.text_inputs.values() {
            input.update(cx, |input, cx| input.clear(cx));
        }
    }
}

impl gpui::EventEmitter<FilterBarEvent> for FilterBar {}

impl Render for FilterBar {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let keys: Vec<String> = self.state.keys().map(str::to_string).collect();
        let show_clear = self.package.supports_clear();
        let any_active = !self.state.is_all_default();
        let bar_entity = cx.entity().clone();

        let mut row = h_flex().w_full().gap_2().flex_wrap().py_2();

        for key in keys {
            let ctx = FilterControlCx {
                state: &self.state,
                options: &self.options,
                text_inputs: &self.text_inputs,
                bar: bar_entity.clone(),
            };
            let rendered = self.package.render_control(&key, &ctx, window, cx);
            if let Some(element) = rendered {
                row = row.child(element);
            } else {
                tracing::warn!(key, "declared filter key has no control");
            }
        }

        row.when(show_clear, |this| {
            let bar = bar_entity.clone();
            this.child(
                Button::new("clear-filters")
                    .label("Clear")
                    .ghost()
                    .small()
                    .disabled(!any_active)
                    .on_click(move |_, _, cx| {
                        bar.update(cx, |bar, cx| bar.clear_all(cx));
                    }),
            )
        })
        .min_h(px(36.))
    }
}

fn placeholder_for(key: &str) -> &'static str {
    match key {
        "search" => "Search...",
        "manufacturer" => "Manufacturer",
        "country" => "Country",
        _ => "Filter",
    }
}
