//! Derived view of the feed: filter, sort, then paginate.
//!
//! Recomputed from [`FeedState`] on every call; nothing is cached.

use std::ops::RangeInclusive;

use jobhub_models::Job;

use crate::evaluate::evaluate;
use crate::pagination::{page_bounds, total_pages};
use crate::sort::sort_newest_first;
use crate::state::{FeedState, LoadStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedView<'a> {
    /// Jobs on the current page, newest first.
    pub jobs: Vec<&'a Job>,
    /// Jobs matching the filters across all pages.
    pub filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub status: LoadStatus,
    pub error: Option<&'a str>,
}

impl<'a> FeedView<'a> {
    pub fn derive(state: &'a FeedState) -> Self {
        let mut filtered = evaluate(state.store.jobs(), &state.filters);
        sort_newest_first(&mut filtered);

        let filtered_count = filtered.len();
        let bounds = page_bounds(filtered_count, state.current_page, state.page_size);
        let jobs = filtered[bounds].to_vec();

        Self {
            jobs,
            filtered_count,
            total_pages: total_pages(filtered_count, state.page_size),
            current_page: state.current_page,
            page_size: state.page_size,
            status: state.status,
            error: state.error.as_deref(),
        }
    }

    /// Page controls are only shown when there is more than one page of results.
    pub fn show_pagination(&self) -> bool {
        self.filtered_count > self.page_size
    }

    /// Loaded fine, but nothing matched the filters.
    pub fn is_empty_result(&self) -> bool {
        self.status == LoadStatus::Succeeded && self.filtered_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers offered by the page controls.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;
    use crate::test_support::JobBuilder;

    fn state_with(n: usize, page_size: usize) -> FeedState {
        let mut state = FeedState::new(page_size);
        let jobs = (0..n)
            .map(|i| JobBuilder::new(&format!("j{:02}", i)).days_ago(i as i64).build())
            .collect();
        state.apply(Action::FetchSucceeded { jobs });
        state
    }

    #[test]
    fn test_third_page_of_fourteen() {
        let mut state = state_with(14, 6);
        state.apply(Action::SetCurrentPage { page: 3 });
        let view = FeedView::derive(&state);

        assert_eq!(view.total_pages, 3);
        let ids: Vec<&str> = view.jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["j12", "j13"]);
        assert!(view.show_pagination());
        assert!(view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn test_pagination_hidden_for_single_page() {
        let view_state = state_with(6, 6);
        let view = FeedView::derive(&view_state);
        assert!(!view.show_pagination());
        assert_eq!(view.page_numbers(), 1..=1);
    }

    #[test]
    fn test_empty_result_only_after_successful_load() {
        let idle = FeedState::default();
        assert!(!FeedView::derive(&idle).is_empty_result());

        let loaded = state_with(0, 6);
        let view = FeedView::derive(&loaded);
        assert!(view.is_empty_result());
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_page_past_the_end_is_empty_not_an_error() {
        let mut state = state_with(4, 6);
        state.apply(Action::SetCurrentPage { page: 5 });
        let view = FeedView::derive(&state);
        assert!(view.jobs.is_empty());
        assert_eq!(view.total_pages, 1);
        assert!(view.has_previous());
    }
}
