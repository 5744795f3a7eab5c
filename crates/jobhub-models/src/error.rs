//! Model error types.

use thiserror::Error;
use validator::ValidationErrors;

use crate::job::WorkModeParseError;
use crate::user::RoleParseError;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    WorkMode(#[from] WorkModeParseError),

    #[error(transparent)]
    Role(#[from] RoleParseError),

    #[error("Invalid job form: {0}")]
    InvalidForm(#[from] ValidationErrors),
}
