//! Paginated list responses

use serde::{Deserialize, Serialize};

/// One page of a paginated list endpoint.
///
/// The server reports `totalItems`/`totalPages`/`currentPage` alongside the
/// rows; [`Page::total_pages`] recomputes the page count from the item
/// count as a fallback for endpoints that omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
}

impl<T> Page<T> {
    /// An empty first page, used as the initial table state.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total_items: 0,
            total_pages: Some(0),
            current_page: Some(1),
        }
    }

    /// The total page count for a given page size.
    ///
    /// Prefers the server-reported value; otherwise `ceil(total / limit)`.
    pub fn total_pages(&self, limit: usize) -> u64 {
        if let Some(total_pages) = self.total_pages {
            return total_pages;
        }
        if limit == 0 {
            return 0;
        }
        self.total_items.div_ceil(limit as u64)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(total_items: u64) -> Page<u32> {
        Page {
            data: Vec::new(),
            total_items,
            total_pages: None,
            current_page: None,
        }
    }

    #[test]
    fn computes_total_pages_when_server_omits_it() {
        assert_eq!(page_of(25).total_pages(10), 3);
        assert_eq!(page_of(30).total_pages(10), 3);
        assert_eq!(page_of(31).total_pages(10), 4);
        assert_eq!(page_of(0).total_pages(10), 0);
    }

    #[test]
    fn prefers_server_reported_total_pages() {
        let mut page = page_of(25);
        page.total_pages = Some(5);
        assert_eq!(page.total_pages(10), 5);
    }

    #[test]
    fn zero_limit_yields_zero_pages() {
        assert_eq!(page_of(25).total_pages(0), 0);
    }

    #[test]
    fn deserializes_camel_case_response() {
        let json = r#"{"data":[1,2,3],"totalItems":25,"totalPages":3,"currentPage":1}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages(10), 3);
    }
}
