//! Feed error types.

use thiserror::Error;

use jobhub_models::{JobId, ModelError};

use crate::backend::BackendError;

pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The backend rejected or failed a read or write; local state is unchanged.
    #[error("{operation} failed: {source}")]
    Persistence {
        operation: &'static str,
        #[source]
        source: BackendError,
    },

    #[error(transparent)]
    Validation(#[from] ModelError),

    #[error("Invalid salary range: minimum {min} exceeds maximum {max}")]
    InvalidSalaryRange { min: f64, max: f64 },

    #[error("Job not found: {0}")]
    NotFound(JobId),
}

impl FeedError {
    pub fn persistence(operation: &'static str, source: BackendError) -> Self {
        Self::Persistence { operation, source }
    }
}
