//! Feed state and the reducer that drives it.
//!
//! Every transition is a named [`Action`]; [`FeedState::apply`] is the only
//! place state changes. Backend calls happen outside and dispatch the
//! matching action once they settle.

use serde::{Deserialize, Serialize};

use jobhub_models::{Job, JobId};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::filter::FilterState;
use crate::store::JobStore;

/// Progress of the bulk fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Succeeded => "succeeded",
            LoadStatus::Failed => "failed",
        }
    }
}

/// A state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    FetchStarted,
    FetchSucceeded { jobs: Vec<Job> },
    FetchFailed { message: String },
    JobAdded { job: Job },
    JobUpdated { job: Job },
    JobDeleted { id: JobId },
    /// A create, update or delete failed; only the message is recorded.
    MutationFailed { message: String },
    SetCurrentPage { page: usize },
    SetFilters { filters: FilterState },
    ResetFilters,
    SetEditJob { job: Job },
    ClearEditJob,
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::FetchStarted => "fetch_started",
            Action::FetchSucceeded { .. } => "fetch_succeeded",
            Action::FetchFailed { .. } => "fetch_failed",
            Action::JobAdded { .. } => "job_added",
            Action::JobUpdated { .. } => "job_updated",
            Action::JobDeleted { .. } => "job_deleted",
            Action::MutationFailed { .. } => "mutation_failed",
            Action::SetCurrentPage { .. } => "set_current_page",
            Action::SetFilters { .. } => "set_filters",
            Action::ResetFilters => "reset_filters",
            Action::SetEditJob { .. } => "set_edit_job",
            Action::ClearEditJob => "clear_edit_job",
        }
    }
}

/// Everything the job board screen renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedState {
    pub store: JobStore,
    pub filters: FilterState,
    pub current_page: usize,
    pub page_size: usize,
    pub status: LoadStatus,
    /// Last user-visible error, if any.
    pub error: Option<String>,
    /// Job whose edit form is open.
    pub edit_job: Option<Job>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl FeedState {
    pub fn new(page_size: usize) -> Self {
        Self {
            store: JobStore::new(),
            filters: FilterState::default(),
            current_page: 1,
            page_size: page_size.max(1),
            status: LoadStatus::Idle,
            error: None,
            edit_job: None,
        }
    }

    /// Apply one transition.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::FetchStarted => {
                self.status = LoadStatus::Loading;
                self.error = None;
            }
            Action::FetchSucceeded { jobs } => {
                self.store.load(jobs);
                self.status = LoadStatus::Succeeded;
            }
            Action::FetchFailed { message } => {
                self.status = LoadStatus::Failed;
                self.error = Some(message);
            }
            Action::JobAdded { job } => self.store.insert(job),
            Action::JobUpdated { job } => {
                self.store.replace(job);
            }
            Action::JobDeleted { id } => {
                self.store.remove(&id);
                if self.edit_job.as_ref().is_some_and(|j| j.id == id) {
                    self.edit_job = None;
                }
            }
            Action::MutationFailed { message } => self.error = Some(message),
            Action::SetCurrentPage { page } => self.current_page = page,
            Action::SetFilters { filters } => {
                self.filters = filters;
                self.current_page = 1;
            }
            // The current page is left alone here; callers that want page 1
            // dispatch SetCurrentPage as well.
            Action::ResetFilters => self.filters = FilterState::default(),
            Action::SetEditJob { job } => self.edit_job = Some(job),
            Action::ClearEditJob => self.edit_job = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::WorkModeFilter;
    use crate::test_support::job;
    use jobhub_models::WorkMode;

    fn loaded(n: usize) -> FeedState {
        let mut state = FeedState::default();
        let jobs = (0..n).map(|i| job(&format!("j{}", i), "Title")).collect();
        state.apply(Action::FetchSucceeded { jobs });
        state
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = FeedState::default();
        assert_eq!(state.status, LoadStatus::Idle);

        state.apply(Action::FetchStarted);
        assert_eq!(state.status, LoadStatus::Loading);

        state.apply(Action::FetchFailed {
            message: "network down".to_string(),
        });
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("network down"));

        state.apply(Action::FetchStarted);
        assert!(state.error.is_none());
        state.apply(Action::FetchSucceeded {
            jobs: vec![job("a", "A")],
        });
        assert_eq!(state.status, LoadStatus::Succeeded);
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn test_set_filters_returns_to_first_page() {
        let mut state = loaded(20);
        state.apply(Action::SetCurrentPage { page: 3 });
        state.apply(Action::SetFilters {
            filters: FilterState {
                work_mode: WorkModeFilter::Only(WorkMode::Hybrid),
                ..FilterState::default()
            },
        });
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_reset_filters_keeps_current_page() {
        let mut state = loaded(20);
        state.apply(Action::SetFilters {
            filters: FilterState {
                search: "x".to_string(),
                ..FilterState::default()
            },
        });
        state.apply(Action::SetCurrentPage { page: 2 });
        state.apply(Action::ResetFilters);
        assert!(state.filters.is_default());
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_set_page_is_stored_verbatim() {
        let mut state = loaded(3);
        state.apply(Action::SetCurrentPage { page: 9 });
        assert_eq!(state.current_page, 9);
    }

    #[test]
    fn test_update_of_unknown_job_is_noop() {
        let mut state = loaded(2);
        let before = state.store.clone();
        state.apply(Action::JobUpdated {
            job: job("ghost", "Ghost"),
        });
        assert_eq!(state.store, before);
    }

    #[test]
    fn test_deleting_edited_job_clears_selection() {
        let mut state = loaded(2);
        state.apply(Action::SetEditJob {
            job: job("j1", "Title"),
        });
        state.apply(Action::JobDeleted {
            id: JobId::from("j0"),
        });
        assert!(state.edit_job.is_some());
        state.apply(Action::JobDeleted {
            id: JobId::from("j1"),
        });
        assert!(state.edit_job.is_none());
        assert!(state.store.is_empty());
    }

    #[test]
    fn test_mutation_failure_leaves_store_and_status() {
        let mut state = loaded(2);
        let store = state.store.clone();
        state.apply(Action::MutationFailed {
            message: "permission denied".to_string(),
        });
        assert_eq!(state.store, store);
        assert_eq!(state.status, LoadStatus::Succeeded);
        assert_eq!(state.error.as_deref(), Some("permission denied"));
    }

    #[test]
    fn test_actions_are_serializable() {
        let action = Action::SetCurrentPage { page: 2 };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "set_current_page", "page": 2 }));
        let back: Action = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
        assert_eq!(Action::ResetFilters.name(), "reset_filters");
    }
}
