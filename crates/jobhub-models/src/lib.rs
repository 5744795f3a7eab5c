//! Shared data models for the JobHub job board.
//!
//! This crate provides Serde-serializable types for:
//! - Job postings and their identifiers
//! - Job form input and its normalization
//! - User identity and roles
//! - Tolerant parsers for the free-text experience, salary and location fields

pub mod error;
pub mod form;
pub mod job;
pub mod parse;
pub mod user;

// Re-export common types
pub use error::{ModelError, ModelResult};
pub use form::{JobForm, DEFAULT_FORM_WORK_MODE};
pub use job::{Job, JobId, JobInput, WorkMode, WorkModeParseError};
pub use parse::{
    canonical_city, leading_integer, normalize_search, normalize_skills, parse_experience,
    parse_salary, SalaryRange, LPA_UNIT,
};
pub use user::{Identity, RoleParseError, UserRole, ANONYMOUS_UID};
