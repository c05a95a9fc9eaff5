//! List-query state
//!
//! The client-side cache of exactly one page of one entity type, replaced
//! wholesale on every parameter change. Fetches are identified by a
//! monotonic epoch: a response that arrives after a newer request started
//! is dropped, so rapid filter changes settle on the last *request* rather
//! than the last response to land.

use ludex_core::{ListQuery, Page, QueryPatch};

pub struct ListQueryState<T> {
    query: ListQuery,
    data: Vec<T>,
    total_items: u64,
    total_pages: u64,
    loading: bool,
    error: Option<String>,
    epoch: u64,
}

impl<T> ListQueryState<T> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            data: Vec::new(),
            total_items: 0,
            total_pages: 0,
            loading: false,
            error: None,
            epoch: 0,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut ListQuery {
        &mut self.query
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Merge a partial query patch, the merge half of merge-then-refetch.
    pub fn merge(&mut self, patch: QueryPatch) {
        self.query.merge(patch);
    }

    pub fn can_go_prev(&self) -> bool {
        self.query.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        (self.query.page as u64) < self.total_pages
    }

    /// Mark a fetch as started and return its epoch token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.epoch += 1;
        self.loading = true;
        self.epoch
    }

    /// Land a fetch result. Returns `false` when the result belonged to a
    /// superseded request and was discarded.
    pub fn finish_fetch(&mut self, epoch: u64, result: Result<Page<T>, String>) -> bool {
        if epoch != self.epoch {
            tracing::debug!(epoch, current = self.epoch, "dropping stale list response");
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.total_pages = page.total_pages(self.query.limit);
                self.total_items = page.total_items;
                self.data = page.data;
                self.error = None;
            }
            Err(message) => {
                tracing::error!(%message, "list fetch failed");
                self.error = Some(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludex_core::{FilterValue, SortOrder};

    fn page(ids: std::ops::Range<u32>, total: u64) -> Page<u32> {
        Page {
            data: ids.collect(),
            total_items: total,
            total_pages: None,
            current_page: None,
        }
    }

    #[test]
    fn fetch_lands_data_and_page_count() {
        let mut state = ListQueryState::new(ListQuery::default());
        let epoch = state.begin_fetch();
        assert!(state.is_loading());

        assert!(state.finish_fetch(epoch, Ok(page(0..10, 25))));
        assert!(!state.is_loading());
        assert_eq!(state.data().len(), 10);
        assert_eq!(state.total_items(), 25);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = ListQueryState::new(ListQuery::default());
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // The slow first response lands after the second request started.
        assert!(!state.finish_fetch(first, Ok(page(0..10, 100))));
        assert!(state.data().is_empty());
        assert!(state.is_loading());

        assert!(state.finish_fetch(second, Ok(page(0..5, 5))));
        assert_eq!(state.data().len(), 5);
    }

    #[test]
    fn fetch_error_is_kept_for_display() {
        let mut state = ListQueryState::<u32>::new(ListQuery::default());
        let epoch = state.begin_fetch();
        assert!(state.finish_fetch(epoch, Err("boom".to_string())));
        assert_eq!(state.error(), Some("boom"));
        assert!(!state.is_loading());
    }

    #[test]
    fn pagination_guards_reflect_edges() {
        let mut state = ListQueryState::new(ListQuery::default());
        let epoch = state.begin_fetch();
        state.finish_fetch(epoch, Ok(page(0..10, 25)));

        assert!(!state.can_go_prev());
        assert!(state.can_go_next());

        state.query_mut().set_page(3);
        assert!(state.can_go_prev());
        assert!(!state.can_go_next());
    }

    #[test]
    fn mutation_refresh_patch_resets_to_first_page() {
        // Successful deletes and creates refetch with a first-page patch,
        // whatever page was showing.
        let mut state = ListQueryState::<u32>::new(ListQuery::default());
        state.merge(QueryPatch::page(3));
        assert_eq!(state.query().page, 3);

        state.merge(QueryPatch::first_page());
        assert_eq!(state.query().page, 1);
    }

    #[test]
    fn page_navigation_then_filter_change_ends_on_page_one() {
        // End-to-end over the state machine: 25 items at limit 10, page 2,
        // then a search filter: the navigation is discarded.
        let mut state = ListQueryState::new(ListQuery::default());
        let epoch = state.begin_fetch();
        state.finish_fetch(epoch, Ok(page(0..10, 25)));
        assert_eq!(state.total_pages(), 3);

        state.merge(QueryPatch::page(2));
        assert_eq!(state.query().page, 2);

        state
            .query_mut()
            .set_filter("search", FilterValue::Text("mario".into()));
        assert_eq!(state.query().page, 1);
        assert_eq!(
            state.query().filters.get("search"),
            Some(&FilterValue::Text("mario".into()))
        );
        assert_eq!(state.query().sort_order, SortOrder::Asc);
    }
}
