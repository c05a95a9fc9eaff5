//! The filter package contract

use std::collections::HashMap;

use gpui::{
    AnyElement, App, Entity, InteractiveElement, IntoElement, ParentElement,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use ludex_core::{EntityKind, FilterState, FilterValue};
use ludex_ui::{ActiveTheme, TextInputState, h_flex};

use crate::bar::FilterBar;

/// Option lists the id-based controls render from, loaded once per page by
/// the owning view and pushed into the bar.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub platforms: Vec<(i64, String)>,
    pub genres: Vec<(i64, String)>,
    pub developers: Vec<(i64, String)>,
}

/// Per-entity filter bundle.
///
/// `apply` must be total and idempotent: whatever partial state comes in,
/// the result carries every declared key with a concrete value, so callers
/// never guard against missing entries. `render_control` is a pure mapping
/// from key to control; a declared key it does not handle is silently
/// unrenderable, which the package tests guard against.
pub trait FilterPackage: Send + Sync {
    fn kind(&self) -> EntityKind;

    /// The declared filter keys with their default (non-filtering) values.
    fn defaults(&self) -> FilterState;

    /// Keys `render_control` actually handles. Exists so tests can verify
    /// every declared key renders.
    fn renderable_keys(&self) -> &'static [&'static str];

    /// Normalize a partial state: overlay known keys onto the defaults,
    /// drop unknown ones.
    fn apply(&self, partial: &FilterState) -> FilterState {
        let mut state = self.defaults();
        for (key, value) in partial.iter() {
            if state.get(key).is_some() {
                state.set(key, value.clone());
            }
        }
        state
    }

    /// Whether the bar offers a clear-all affordance. Absence of the
    /// affordance is policy, not an error.
    fn supports_clear(&self) -> bool {
        true
    }

    /// Map one filter key to its control. Returns `None` for keys the
    /// package does not render.
    fn render_control(
        &self,
        key: &str,
        ctx: &FilterControlCx,
        window: &mut Window,
        cx: &mut App,
    ) -> Option<AnyElement>;
}

/// Everything a package needs to build controls: the current state, the
/// option lists, the text-input entities owned by the bar, and a handle
/// back to the bar for change callbacks.
pub struct FilterControlCx<'a> {
    pub state: &'a FilterState,
    pub options: &'a FilterOptions,
    pub(crate) text_inputs: &'a HashMap<String, Entity<TextInputState>>,
    pub(crate) bar: Entity<FilterBar>,
}

impl FilterControlCx<'_> {
    pub fn value(&self, key: &str) -> Option<&FilterValue> {
        self.state.get(key)
    }

    /// A free-text control bound to the bar-owned input entity for `key`.
    pub fn text_input(&self, key: &str) -> Option<AnyElement> {
        let input = self.text_inputs.get(key)?;
        Some(
            div()
                .w(px(200.))
                .child(input.clone())
                .into_any_element(),
        )
    }

    /// A pair of year inputs composing one range key.
    pub fn year_range(&self, key: &str, cx: &App) -> Option<AnyElement> {
        let from = self.text_inputs.get(&format!("{key}__from"))?;
        let to = self.text_inputs.get(&format!("{key}__to"))?;
        let muted = cx.theme().muted_foreground;
        Some(
            h_flex()
                .gap_1()
                .child(div().w(px(64.)).child(from.clone()))
                .child(
                    div()
                        .text_size(px(12.))
                        .text_color(muted)
                        .child("to"),
                )
                .child(div().w(px(64.)).child(to.clone()))
                .into_any_element(),
        )
    }

    /// A row of toggle chips over an id list (platforms, genres, ...).
    pub fn id_chips(&self, key: &str, options: &[(i64, String)], cx: &App) -> AnyElement {
        let theme = cx.theme();
        let selected: Vec<i64> = match self.state.get(key) {
            Some(FilterValue::Ids(ids)) => ids.clone(),
            _ => Vec::new(),
        };

        let mut row = h_flex().gap_1().flex_wrap();
        for (ix, (id, label)) in options.iter().enumerate() {
            let id = *id;
            let is_on = selected.contains(&id);
            let bar = self.bar.clone();
            let key = key.to_string();
            let selected = selected.clone();

            row = row.child(
                div()
                    .id(("filter-chip", ix))
                    .px_2()
                    .py(px(2.))
                    .rounded(theme.radius)
                    .border_1()
                    .border_color(if is_on { theme.primary } else { theme.border })
                    .bg(if is_on { theme.table_active } else { theme.secondary })
                    .text_size(px(12.))
                    .text_color(theme.foreground)
                    .cursor_pointer()
                    .on_click(move |_, _, cx| {
                        let mut ids = selected.clone();
                        if let Some(pos) = ids.iter().position(|v| *v == id) {
                            ids.remove(pos);
                        } else {
                            ids.push(id);
                        }
                        let key = key.clone();
                        bar.update(cx, move |bar, cx| {
                            bar.set_value(&key, FilterValue::Ids(ids), cx);
                        });
                    })
                    .child(label.clone()),
            );
        }
        row.into_any_element()
    }

    /// A tri-state cycle button for a flag key: no preference → on → off.
    pub fn flag_cycle(
        &self,
        key: &str,
        labels: (&str, &str, &str),
        cx: &App,
    ) -> AnyElement {
        let theme = cx.theme();
        let current = match self.state.get(key) {
            Some(FilterValue::Flag(flag)) => *flag,
            _ => None,
        };
        let label = match current {
            None => labels.0,
            Some(true) => labels.1,
            Some(false) => labels.2,
        };
        let next = match current {
            None => Some(true),
            Some(true) => Some(false),
            Some(false) => None,
        };
        let bar = self.bar.clone();
        let key = key.to_string();

        div()
            .id("filter-flag")
            .px_2()
            .py(px(2.))
            .rounded(theme.radius)
            .border_1()
            .border_color(if current.is_some() {
                theme.primary
            } else {
                theme.border
            })
            .bg(theme.secondary)
            .text_size(px(12.))
            .text_color(theme.foreground)
            .cursor_pointer()
            .on_click(move |_, _, cx| {
                let key = key.clone();
                bar.update(cx, move |bar, cx| {
                    bar.set_value(&key, FilterValue::Flag(next), cx);
                });
            })
            .child(label.to_string())
            .into_any_element()
    }
}
