//! Persistence port for the mutation pipeline.
//!
//! The feed never writes locally before the backend confirms, so every
//! implementation only needs to report success or failure.

mod firestore;
mod memory;

pub use firestore::FirestoreJobBackend;
pub use memory::{BackendOp, MemoryJobBackend};

use async_trait::async_trait;
use thiserror::Error;

use jobhub_firestore::FirestoreError;
use jobhub_models::{Job, JobId, JobInput};

pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Firestore error: {0}")]
    Firestore(#[from] FirestoreError),

    #[error("Job not found: {0}")]
    NotFound(JobId),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Where jobs are persisted.
#[async_trait]
pub trait JobBackend: Send + Sync {
    /// Every stored job; no server-side filtering or ordering.
    async fn fetch_all(&self) -> BackendResult<Vec<Job>>;

    /// Store a new job and return the identifier assigned to it.
    async fn create(&self, input: &JobInput) -> BackendResult<JobId>;

    /// Overwrite the editable fields of an existing job.
    async fn update(&self, id: &JobId, input: &JobInput) -> BackendResult<()>;

    /// Remove a job. Removing an absent job succeeds.
    async fn delete(&self, id: &JobId) -> BackendResult<()>;
}
