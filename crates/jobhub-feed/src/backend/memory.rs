//! In-process backend for tests and local demos.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use jobhub_models::{Job, JobId, JobInput};

use super::{BackendError, BackendResult, JobBackend};

/// Backend operations, for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendOp {
    FetchAll,
    Create,
    Update,
    Delete,
}

/// Jobs kept in memory. Identifiers are random UUIDs.
#[derive(Debug, Default)]
pub struct MemoryJobBackend {
    jobs: Mutex<Vec<Job>>,
    failures: Mutex<VecDeque<BackendOp>>,
}

impl MemoryJobBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
            failures: Mutex::new(VecDeque::new()),
        }
    }

    /// Make the next call of `op` fail with [`BackendError::Unavailable`].
    pub async fn fail_next(&self, op: BackendOp) {
        self.failures.lock().await.push_back(op);
    }

    /// Snapshot of what is stored.
    pub async fn jobs(&self) -> Vec<Job> {
        self.jobs.lock().await.clone()
    }

    async fn check(&self, op: BackendOp) -> BackendResult<()> {
        let mut failures = self.failures.lock().await;
        match failures.iter().position(|f| *f == op) {
            Some(index) => {
                failures.remove(index);
                Err(BackendError::Unavailable(format!("injected {:?} failure", op)))
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobBackend for MemoryJobBackend {
    async fn fetch_all(&self) -> BackendResult<Vec<Job>> {
        self.check(BackendOp::FetchAll).await?;
        Ok(self.jobs().await)
    }

    async fn create(&self, input: &JobInput) -> BackendResult<JobId> {
        self.check(BackendOp::Create).await?;
        let id = JobId::generate();
        self.jobs
            .lock()
            .await
            .push(Job::from_input(id.clone(), input.clone()));
        Ok(id)
    }

    async fn update(&self, id: &JobId, input: &JobInput) -> BackendResult<()> {
        self.check(BackendOp::Update).await?;
        let mut jobs = self.jobs.lock().await;
        let slot = jobs
            .iter_mut()
            .find(|j| &j.id == id)
            .ok_or_else(|| BackendError::NotFound(id.clone()))?;
        *slot = slot.apply_edit(input.clone());
        Ok(())
    }

    async fn delete(&self, id: &JobId) -> BackendResult<()> {
        self.check(BackendOp::Delete).await?;
        self.jobs.lock().await.retain(|j| &j.id != id);
        Ok(())
    }
}
