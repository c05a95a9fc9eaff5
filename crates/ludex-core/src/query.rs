//! List-query model
//!
//! Every paginated listing in the client is driven by a [`ListQuery`]: the
//! page/limit/sort/search tuple plus an entity-specific [`FilterState`].
//! The query is owned by the table orchestrator and passed by value into
//! the fetch layer on every state change; nothing here performs IO.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sort direction sent to the list endpoints as `sortOrder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The wire representation (`asc` / `desc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// A single filter value as declared by a filter package.
///
/// The variant fixes both the control a package renders for the key and the
/// query-string encoding. "Empty" values (empty text, empty id list, fully
/// open range, unset flag) are the declared defaults and are omitted from
/// the request entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Free-text match (substring search server-side).
    Text(String),
    /// A multi-select over entity ids, comma-joined on the wire.
    Ids(Vec<i64>),
    /// An inclusive year range; either bound may be open.
    YearRange { from: Option<i32>, to: Option<i32> },
    /// A tri-state toggle: `None` means "no preference".
    Flag(Option<bool>),
}

impl FilterValue {
    /// Whether this value equals the "no filtering" default for its shape.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Ids(ids) => ids.is_empty(),
            Self::YearRange { from, to } => from.is_none() && to.is_none(),
            Self::Flag(flag) => flag.is_none(),
        }
    }

    /// Append this value's query-string pairs for the given filter key.
    ///
    /// Default values append nothing; a range contributes `{key}From` /
    /// `{key}To` pairs for whichever bounds are set.
    pub fn extend_query_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        match self {
            Self::Text(s) => {
                if !s.is_empty() {
                    pairs.push((key.to_string(), s.clone()));
                }
            }
            Self::Ids(ids) => {
                if !ids.is_empty() {
                    let joined = ids
                        .iter()
                        .map(|id| id.to_string())
                        .collect::<Vec<_>>()
                        .join(",");
                    pairs.push((key.to_string(), joined));
                }
            }
            Self::YearRange { from, to } => {
                if let Some(from) = from {
                    pairs.push((format!("{key}From"), from.to_string()));
                }
                if let Some(to) = to {
                    pairs.push((format!("{key}To"), to.to_string()));
                }
            }
            Self::Flag(flag) => {
                if let Some(flag) = flag {
                    pairs.push((key.to_string(), flag.to_string()));
                }
            }
        }
    }
}

/// Ordered map of filter key → value for one entity kind.
///
/// Keys are the camelCase names the list endpoints expect (`platformIds`,
/// `releaseYear`, ...). The set of keys is declared by the entity's filter
/// package; the orchestrator treats the state as opaque.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState(BTreeMap<String, FilterValue>);

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) {
        self.0.insert(key.into(), value);
    }

    pub fn with(mut self, key: impl Into<String>, value: FilterValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every value is its declared default (nothing filters).
    pub fn is_all_default(&self) -> bool {
        self.0.values().all(FilterValue::is_default)
    }
}

impl FromIterator<(String, FilterValue)> for FilterState {
    fn from_iter<I: IntoIterator<Item = (String, FilterValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The query parameter tuple driving a page fetch.
///
/// Owned exclusively by the table orchestrator. Filter changes always reset
/// the page to 1: a new filter invalidates the old pagination position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub search: String,
    pub filters: FilterState,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort_field: String::new(),
            sort_order: SortOrder::Asc,
            search: String::new(),
            filters: FilterState::new(),
        }
    }
}

impl ListQuery {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_field = field.into();
        self.sort_order = order;
        self
    }

    /// Navigate to a page. Bounds are enforced by the caller (disabled
    /// buttons at the edges), not clamped here.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Cycle the sort for a header click.
    ///
    /// Clicking the current sort field flips the direction; clicking any
    /// other field always starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = field.to_string();
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Merge a filter change and reset pagination to the first page.
    pub fn set_filter(&mut self, key: impl Into<String>, value: FilterValue) {
        self.filters.set(key, value);
        self.page = 1;
    }

    /// Update the free-text search and reset pagination to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Apply a partial patch, merging present fields over the current
    /// query. This is the merge half of the fetch layer's
    /// merge-then-refetch contract.
    pub fn merge(&mut self, patch: QueryPatch) {
        if let Some(page) = patch.page {
            self.page = page;
        }
        if let Some(limit) = patch.limit {
            self.limit = limit;
        }
        if let Some(sort_field) = patch.sort_field {
            self.sort_field = sort_field;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(filters) = patch.filters {
            self.filters = filters;
        }
    }

    /// Encode the query as URL query-string pairs.
    ///
    /// Empty sort/search are omitted; filters flatten through
    /// [`FilterValue::extend_query_pairs`].
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];

        if !self.sort_field.is_empty() {
            pairs.push(("sortField".to_string(), self.sort_field.clone()));
            pairs.push(("sortOrder".to_string(), self.sort_order.as_str().to_string()));
        }

        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }

        for (key, value) in self.filters.iter() {
            value.extend_query_pairs(key, &mut pairs);
        }

        pairs
    }
}

/// A partial [`ListQuery`] update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPatch {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub search: Option<String>,
    pub filters: Option<FilterState>,
}

impl QueryPatch {
    pub fn page(page: usize) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn first_page() -> Self {
        Self::page(1)
    }

    pub fn sort(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            sort_field: Some(field.into()),
            sort_order: Some(order),
            ..Self::default()
        }
    }

    /// A filter replacement patch; always lands on page 1.
    pub fn filters(filters: FilterState) -> Self {
        Self {
            page: Some(1),
            filters: Some(filters),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query() -> ListQuery {
        ListQuery::default()
    }

    #[test]
    fn toggle_sort_same_field_cycles_direction() {
        let mut q = query();
        q.toggle_sort("title");
        assert_eq!(q.sort_field, "title");
        assert_eq!(q.sort_order, SortOrder::Asc);

        q.toggle_sort("title");
        assert_eq!(q.sort_order, SortOrder::Desc);

        q.toggle_sort("title");
        assert_eq!(q.sort_order, SortOrder::Asc);
    }

    #[test]
    fn toggle_sort_new_field_always_starts_ascending() {
        let mut q = query();
        q.toggle_sort("title");
        q.toggle_sort("title");
        assert_eq!(q.sort_order, SortOrder::Desc);

        q.toggle_sort("releaseYear");
        assert_eq!(q.sort_field, "releaseYear");
        assert_eq!(q.sort_order, SortOrder::Asc);
    }

    #[test]
    fn set_filter_resets_page() {
        let mut q = query();
        q.set_page(7);
        q.set_filter("search", FilterValue::Text("mario".into()));
        assert_eq!(q.page, 1);

        // Every subsequent filter change resets again, whatever the page.
        q.set_page(3);
        q.set_filter("platformIds", FilterValue::Ids(vec![1, 2]));
        assert_eq!(q.page, 1);
    }

    #[test]
    fn set_search_resets_page() {
        let mut q = query();
        q.set_page(4);
        q.set_search("zelda");
        assert_eq!(q.page, 1);
        assert_eq!(q.search, "zelda");
    }

    #[test]
    fn page_navigation_then_filter_change_discards_navigation() {
        // Mirrors the documented end-to-end scenario: page 2 then a search
        // filter lands the query back on page 1 with the filter applied.
        let mut q = query();
        q.set_page(2);
        q.set_filter("search", FilterValue::Text("mario".into()));
        assert_eq!(q.page, 1);
        assert_eq!(
            q.filters.get("search"),
            Some(&FilterValue::Text("mario".into()))
        );
    }

    #[test]
    fn merge_applies_only_present_fields() {
        let mut q = query();
        q.toggle_sort("title");
        q.merge(QueryPatch {
            page: Some(3),
            ..QueryPatch::default()
        });
        assert_eq!(q.page, 3);
        assert_eq!(q.sort_field, "title");

        q.merge(QueryPatch::sort("rating", SortOrder::Desc));
        assert_eq!(q.page, 3);
        assert_eq!(q.sort_field, "rating");
        assert_eq!(q.sort_order, SortOrder::Desc);
    }

    #[test]
    fn filters_patch_lands_on_first_page() {
        let mut q = query();
        q.set_page(5);
        let filters =
            FilterState::new().with("search", FilterValue::Text("metroid".into()));
        q.merge(QueryPatch::filters(filters.clone()));
        assert_eq!(q.page, 1);
        assert_eq!(q.filters, filters);
    }

    #[test]
    fn query_pairs_omit_empty_sort_and_search() {
        let q = query();
        let pairs = q.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_include_sort_and_filters() {
        let mut q = query();
        q.toggle_sort("title");
        q.set_filter("platformIds", FilterValue::Ids(vec![4, 8]));
        q.set_filter(
            "releaseYear",
            FilterValue::YearRange {
                from: Some(1990),
                to: None,
            },
        );

        let pairs = q.to_query_pairs();
        assert!(pairs.contains(&("sortField".to_string(), "title".to_string())));
        assert!(pairs.contains(&("sortOrder".to_string(), "asc".to_string())));
        assert!(pairs.contains(&("platformIds".to_string(), "4,8".to_string())));
        assert!(pairs.contains(&("releaseYearFrom".to_string(), "1990".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "releaseYearTo"));
    }

    #[test]
    fn default_filter_values_are_omitted_from_pairs() {
        let mut q = query();
        q.set_filter("search", FilterValue::Text(String::new()));
        q.set_filter("genreIds", FilterValue::Ids(vec![]));
        q.set_filter("published", FilterValue::Flag(None));
        let pairs = q.to_query_pairs();
        assert_eq!(pairs.len(), 2); // page + limit only
    }

    #[test]
    fn filter_value_default_detection() {
        assert!(FilterValue::Text(String::new()).is_default());
        assert!(!FilterValue::Text("x".into()).is_default());
        assert!(FilterValue::Ids(vec![]).is_default());
        assert!(FilterValue::YearRange { from: None, to: None }.is_default());
        assert!(
            !FilterValue::YearRange {
                from: Some(2001),
                to: None
            }
            .is_default()
        );
        assert!(FilterValue::Flag(None).is_default());
        assert!(!FilterValue::Flag(Some(false)).is_default());
    }
}
