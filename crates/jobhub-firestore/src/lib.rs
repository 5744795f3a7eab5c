//! Firestore REST API client.
//!
//! This crate provides:
//! - Typed repositories for job postings and user profiles
//! - Service account or Firebase ID token authentication
//! - Masked updates, idempotent deletes and retry logic
//! - Emulator support for local development

pub mod client;
pub mod error;
pub mod jobs_repo;
pub mod metrics;
pub mod retry;
pub mod token_cache;
pub mod types;
pub mod users_repo;

pub use client::{FirestoreClient, FirestoreConfig};
pub use error::{FirestoreError, FirestoreResult};
pub use jobs_repo::{JobRepository, JOBS_COLLECTION};
pub use retry::RetryConfig;
pub use token_cache::Credentials;
pub use types::{Document, FromFirestoreValue, ToFirestoreValue, Value};
pub use users_repo::{UserRepository, USERS_COLLECTION};
