//! Job feed engine.
//!
//! This crate provides:
//! - The in-memory job store and reducer-driven feed state
//! - Filter state, the filter panel draft and its options
//! - Filter evaluation, newest-first ordering and pagination
//! - The mutation pipeline over a pluggable [`JobBackend`]
//! - Derived page view and summary line

pub mod backend;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod feed;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod state;
pub mod store;
pub mod summary;
pub mod telemetry;
pub mod view;

#[cfg(test)]
mod test_support;

pub use backend::{BackendError, BackendOp, FirestoreJobBackend, JobBackend, MemoryJobBackend};
pub use config::{FeedConfig, MissingUpdatePolicy, DEFAULT_PAGE_SIZE};
pub use error::{FeedError, FeedResult};
pub use evaluate::evaluate;
pub use feed::JobFeed;
pub use filter::{ExperienceFilter, FilterDraft, FilterOptions, FilterState, WorkModeFilter};
pub use pagination::{paginate, total_pages};
pub use sort::sort_newest_first;
pub use state::{Action, FeedState, LoadStatus};
pub use store::JobStore;
pub use summary::FeedSummary;
pub use view::FeedView;
