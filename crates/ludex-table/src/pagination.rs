//! Pagination helpers
//!
//! Page navigation is rendered by the table footer; the arithmetic and
//! status copy live here so they can be tested without a window.

/// Target pages for the four navigation buttons, `None` when the button
/// should be disabled. Bounds are enforced here, at the caller level; the
/// query itself never clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NavTargets {
    pub first: Option<usize>,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub last: Option<usize>,
}

pub(crate) fn nav_targets(page: usize, total_pages: u64) -> NavTargets {
    let total = total_pages as usize;
    NavTargets {
        first: (page > 1).then_some(1),
        prev: (page > 1).then(|| page - 1),
        next: (total > 0 && page < total).then(|| page + 1),
        last: (total > 0 && page < total).then_some(total),
    }
}

/// Footer status line, e.g. `10 records in page 2 of 3 (25 total)`.
pub(crate) fn status_text(
    rows_in_page: usize,
    page: usize,
    total_pages: u64,
    total_items: u64,
) -> String {
    if total_pages == 0 {
        return format!("{rows_in_page} records");
    }
    format!("{rows_in_page} records in page {page} of {total_pages} ({total_items} total)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_disables_backward_navigation() {
        let nav = nav_targets(1, 3);
        assert_eq!(nav.first, None);
        assert_eq!(nav.prev, None);
        assert_eq!(nav.next, Some(2));
        assert_eq!(nav.last, Some(3));
    }

    #[test]
    fn last_page_disables_forward_navigation() {
        let nav = nav_targets(3, 3);
        assert_eq!(nav.first, Some(1));
        assert_eq!(nav.prev, Some(2));
        assert_eq!(nav.next, None);
        assert_eq!(nav.last, None);
    }

    #[test]
    fn middle_page_enables_everything() {
        let nav = nav_targets(2, 3);
        assert_eq!(nav.first, Some(1));
        assert_eq!(nav.prev, Some(1));
        assert_eq!(nav.next, Some(3));
        assert_eq!(nav.last, Some(3));
    }

    #[test]
    fn empty_result_set_disables_all_navigation() {
        let nav = nav_targets(1, 0);
        assert_eq!(nav.next, None);
        assert_eq!(nav.last, None);
    }

    #[test]
    fn status_line_formats() {
        assert_eq!(
            status_text(10, 2, 3, 25),
            "10 records in page 2 of 3 (25 total)"
        );
        assert_eq!(status_text(0, 1, 0, 0), "0 records");
    }
}
