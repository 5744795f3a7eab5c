//! The job feed: state plus the backend it is persisted in.
//!
//! Mutations call the backend first and only dispatch the matching action
//! once it succeeds, so a failed call leaves jobs, filters and page exactly
//! as they were.

use chrono::Utc;
use tracing::{debug, info, info_span, warn, Instrument};

use jobhub_models::{Identity, Job, JobForm, JobId, UserRole};

use crate::backend::{BackendError, JobBackend};
use crate::config::{FeedConfig, MissingUpdatePolicy};
use crate::error::{FeedError, FeedResult};
use crate::filter::{FilterDraft, FilterOptions};
use crate::state::{Action, FeedState};
use crate::summary::FeedSummary;
use crate::view::FeedView;

pub struct JobFeed<B> {
    backend: B,
    config: FeedConfig,
    state: FeedState,
    identity: Identity,
    role: UserRole,
}

impl<B: JobBackend> JobFeed<B> {
    pub fn new(backend: B, config: FeedConfig) -> Self {
        let state = FeedState::new(config.page_size);
        Self {
            backend,
            config,
            state,
            identity: Identity::Anonymous,
            role: UserRole::default(),
        }
    }

    /// Act as this user from now on.
    pub fn with_identity(mut self, identity: Identity, role: UserRole) -> Self {
        self.identity = identity;
        self.role = role;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Whether the "Add Job" entry point is offered.
    pub fn can_post_jobs(&self) -> bool {
        self.role.can_post_jobs()
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.name(), "Dispatching feed action");
        self.state.apply(action);
    }

    // =========================================================================
    // Backend round trips
    // =========================================================================

    /// Reload every job from the backend.
    ///
    /// On failure the status becomes `failed` and the previous jobs stay.
    pub async fn refresh(&mut self) -> FeedResult<()> {
        self.dispatch(Action::FetchStarted);

        let result = self
            .backend
            .fetch_all()
            .instrument(info_span!("feed_refresh"))
            .await;

        match result {
            Ok(jobs) => {
                info!(count = jobs.len(), "Loaded jobs");
                self.dispatch(Action::FetchSucceeded { jobs });
                Ok(())
            }
            Err(e) => {
                let err = FeedError::persistence("fetch jobs", e);
                warn!("Failed to load jobs: {}", err);
                self.dispatch(Action::FetchFailed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Post a new job from the form.
    pub async fn create(&mut self, form: JobForm) -> FeedResult<Job> {
        let input = form.validated_input(&self.identity, Utc::now())?;

        let result = self
            .backend
            .create(&input)
            .instrument(info_span!("feed_create"))
            .await;

        match result {
            Ok(id) => {
                let job = Job::from_input(id, input);
                info!(job_id = %job.id, "Job posted");
                self.dispatch(Action::JobAdded { job: job.clone() });
                self.dispatch(Action::ClearEditJob);
                Ok(job)
            }
            Err(e) => Err(self.mutation_failed("create job", e)),
        }
    }

    /// Save an edit. The posting time and author of the stored job are kept.
    pub async fn update(&mut self, id: &JobId, form: JobForm) -> FeedResult<Job> {
        let existing = self.state.store.get(id).cloned();
        if existing.is_none() && self.config.missing_update == MissingUpdatePolicy::Reject {
            return Err(FeedError::NotFound(id.clone()));
        }

        let input = form.validated_input(&self.identity, Utc::now())?;
        let job = match &existing {
            Some(current) => current.apply_edit(input),
            None => Job::from_input(id.clone(), input),
        };

        let result = self
            .backend
            .update(id, &job.to_input())
            .instrument(info_span!("feed_update", job_id = %id))
            .await;

        match result {
            Ok(()) => {
                if existing.is_some() {
                    info!(job_id = %id, "Job updated");
                    self.dispatch(Action::JobUpdated { job: job.clone() });
                } else {
                    debug!(job_id = %id, "Updated job is not loaded locally");
                }
                self.dispatch(Action::ClearEditJob);
                Ok(job)
            }
            Err(e) => Err(self.mutation_failed("update job", e)),
        }
    }

    pub async fn delete(&mut self, id: &JobId) -> FeedResult<()> {
        let result = self
            .backend
            .delete(id)
            .instrument(info_span!("feed_delete", job_id = %id))
            .await;

        match result {
            Ok(()) => {
                info!(job_id = %id, "Job deleted");
                self.dispatch(Action::JobDeleted { id: id.clone() });
                Ok(())
            }
            Err(e) => Err(self.mutation_failed("delete job", e)),
        }
    }

    fn mutation_failed(&mut self, operation: &'static str, source: BackendError) -> FeedError {
        let err = FeedError::persistence(operation, source);
        warn!("{}", err);
        self.dispatch(Action::MutationFailed {
            message: err.to_string(),
        });
        err
    }

    // =========================================================================
    // Local transitions
    // =========================================================================

    /// A draft of the committed filters for the filter panel.
    pub fn draft(&self) -> FilterDraft {
        FilterDraft::from_state(&self.state.filters)
    }

    /// Commit a draft. Goes back to page 1.
    pub fn apply_filters(&mut self, draft: FilterDraft) -> FeedResult<()> {
        let filters = draft.commit()?;
        self.dispatch(Action::SetFilters { filters });
        Ok(())
    }

    /// Restore default filters. The current page is kept.
    pub fn reset_filters(&mut self) {
        self.dispatch(Action::ResetFilters);
    }

    pub fn set_page(&mut self, page: usize) {
        self.dispatch(Action::SetCurrentPage { page });
    }

    /// Reset filters and go back to page 1.
    pub fn show_all(&mut self) {
        self.dispatch(Action::ResetFilters);
        self.dispatch(Action::SetCurrentPage { page: 1 });
    }

    /// Open the edit form for a loaded job.
    pub fn begin_edit(&mut self, id: &JobId) -> FeedResult<JobForm> {
        let job = self
            .state
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| FeedError::NotFound(id.clone()))?;
        let form = JobForm::from_job(&job);
        self.dispatch(Action::SetEditJob { job });
        Ok(form)
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(Action::ClearEditJob);
    }

    // =========================================================================
    // Derived
    // =========================================================================

    pub fn view(&self) -> FeedView<'_> {
        FeedView::derive(&self.state)
    }

    pub fn summary(&self) -> FeedSummary {
        FeedSummary::new(&self.view(), &self.state.filters)
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_jobs(self.state.store.jobs())
    }
}
