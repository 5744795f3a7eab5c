//! Feed configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Jobs per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// What an update does when the job is not in the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingUpdatePolicy {
    /// Write to the backend anyway; the local store is left as is.
    #[default]
    Ignore,
    /// Fail with `NotFound` before touching the backend.
    Reject,
}

impl fmt::Display for MissingUpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingUpdatePolicy::Ignore => write!(f, "ignore"),
            MissingUpdatePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for MissingUpdatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown missing-update policy: {}", other)),
        }
    }
}

/// Feed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Jobs per page, fixed for the session
    pub page_size: usize,
    /// Update behavior for ids missing from the local store
    pub missing_update: MissingUpdatePolicy,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            missing_update: MissingUpdatePolicy::default(),
        }
    }
}

impl FeedConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let page_size = std::env::var("JOBHUB_PAGE_SIZE")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let missing_update = match std::env::var("JOBHUB_MISSING_UPDATE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}, falling back to ignore", e);
                MissingUpdatePolicy::Ignore
            }),
            Err(_) => MissingUpdatePolicy::default(),
        };

        Self {
            page_size,
            missing_update,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_missing_update(mut self, policy: MissingUpdatePolicy) -> Self {
        self.missing_update = policy;
        self
    }
}
