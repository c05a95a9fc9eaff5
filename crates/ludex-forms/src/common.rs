//! Shared form building blocks

use std::rc::Rc;

use gpui::{AnyElement, App, Entity, IntoElement, ParentElement, Styled, div, px};
use ludex_ui::{ActiveTheme, Checkbox, TextInputState, h_flex, v_flex};

/// Option lists the select/chips controls render from, fetched once per
/// page and shared with every form it opens.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    pub platforms: Vec<(i64, String)>,
    pub genres: Vec<(i64, String)>,
    pub developers: Vec<(i64, String)>,
    pub games: Vec<(i64, String)>,
}

/// A labeled input row.
pub(crate) fn labeled_field(
    label: &'static str,
    input: &Entity<TextInputState>,
    cx: &App,
) -> AnyElement {
    v_flex()
        .gap_1()
        .w_full()
        .child(
            div()
                .text_size(px(12.))
                .text_color(cx.theme().muted_foreground)
                .child(label),
        )
        .child(input.clone())
        .into_any_element()
}

/// A labeled row around an arbitrary control.
pub(crate) fn labeled(label: &'static str, control: AnyElement, cx: &App) -> AnyElement {
    v_flex()
        .gap_1()
        .w_full()
        .child(
            div()
                .text_size(px(12.))
                .text_color(cx.theme().muted_foreground)
                .child(label),
        )
        .child(control)
        .into_any_element()
}

/// A wrapping group of checkboxes over `(id, label)` options; toggling one
/// calls `on_toggle` with the id.
pub(crate) fn checkbox_group(
    id_base: &'static str,
    options: &[(i64, String)],
    selected: &[i64],
    on_toggle: Rc<dyn Fn(i64, &mut App)>,
    cx: &App,
) -> AnyElement {
    let theme = cx.theme();
    let mut row = h_flex().gap_3().flex_wrap();

    for (ix, (id, label)) in options.iter().enumerate() {
        let id = *id;
        let is_on = selected.contains(&id);
        let on_toggle = on_toggle.clone();

        row = row.child(
            Checkbox::new((id_base, ix))
                .checked(is_on)
                .label(label.clone())
                .on_click(move |_, _, cx| on_toggle(id, cx)),
        );
    }

    if options.is_empty() {
        row = row.child(
            div()
                .text_size(px(12.))
                .text_color(theme.muted_foreground)
                .child("(none available)"),
        );
    }

    row.into_any_element()
}

/// Parse an optional year field; empty is `None`, junk is an error.
pub(crate) fn parse_year(text: &str) -> Result<Option<i32>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| format!("\"{trimmed}\" is not a valid year"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_year_accepts_empty_and_numbers() {
        assert_eq!(parse_year(""), Ok(None));
        assert_eq!(parse_year("  "), Ok(None));
        assert_eq!(parse_year("1998"), Ok(Some(1998)));
        assert_eq!(parse_year(" 2001 "), Ok(Some(2001)));
    }

    #[test]
    fn parse_year_rejects_junk() {
        assert!(parse_year("soon").is_err());
        assert!(parse_year("19.98").is_err());
    }
}
