//! Job posting definitions.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a job posting.
///
/// Assigned by the backend on creation and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new random job ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Remote,
    Hybrid,
    /// Work from office
    Wfo,
}

impl WorkMode {
    pub const ALL: &'static [WorkMode] = &[WorkMode::Remote, WorkMode::Hybrid, WorkMode::Wfo];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Remote => "remote",
            WorkMode::Hybrid => "hybrid",
            WorkMode::Wfo => "wfo",
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkMode {
    type Err = WorkModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remote" => Ok(WorkMode::Remote),
            "hybrid" => Ok(WorkMode::Hybrid),
            "wfo" => Ok(WorkMode::Wfo),
            _ => Err(WorkModeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown work mode: {0}")]
pub struct WorkModeParseError(pub String);

/// Job payload without an identifier, as sent to the backend on create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JobInput {
    pub title: String,
    pub company_name: String,
    /// Free text, e.g. "2-5 years" or "5+ years"
    pub experience: String,
    /// Free text, "City, Region"
    pub location: String,
    pub description: String,
    /// Trimmed, non-empty entries in the order they were entered
    #[serde(default)]
    pub skills: Vec<String>,
    pub openings: u32,
    pub work_mode: WorkMode,
    /// Free text of the form "₹6,00,000 - ₹10,00,000"
    pub salary: String,
    pub posted_at: DateTime<Utc>,
    /// Creator uid, or the anonymous sentinel
    pub posted_by: String,
}

/// A job posting held in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company_name: String,
    pub experience: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub openings: u32,
    pub work_mode: WorkMode,
    pub salary: String,
    pub posted_at: DateTime<Utc>,
    pub posted_by: String,
}

impl Job {
    /// Attach a backend-assigned identifier to a payload.
    pub fn from_input(id: JobId, input: JobInput) -> Self {
        Self {
            id,
            title: input.title,
            company_name: input.company_name,
            experience: input.experience,
            location: input.location,
            description: input.description,
            skills: input.skills,
            openings: input.openings,
            work_mode: input.work_mode,
            salary: input.salary,
            posted_at: input.posted_at,
            posted_by: input.posted_by,
        }
    }

    /// Replace every mutable field with the edited payload.
    ///
    /// `id`, `posted_at` and `posted_by` are kept from the original posting.
    pub fn apply_edit(&self, input: JobInput) -> Self {
        Self {
            id: self.id.clone(),
            posted_at: self.posted_at,
            posted_by: self.posted_by.clone(),
            ..Self::from_input(self.id.clone(), input)
        }
    }

    /// Payload view of this job, used when re-submitting it to the backend.
    pub fn to_input(&self) -> JobInput {
        JobInput {
            title: self.title.clone(),
            company_name: self.company_name.clone(),
            experience: self.experience.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            skills: self.skills.clone(),
            openings: self.openings,
            work_mode: self.work_mode,
            salary: self.salary.clone(),
            posted_at: self.posted_at,
            posted_by: self.posted_by.clone(),
        }
    }

    /// City part of the location, used by the location filter.
    pub fn city(&self) -> &str {
        crate::parse::canonical_city(&self.location)
    }

    /// Whole days elapsed since posting.
    pub fn days_since_posted(&self, now: DateTime<Utc>) -> i64 {
        (now - self.posted_at).num_days().max(0)
    }

    /// Human label for the posting age: "today", "1 day ago", "3 days ago".
    pub fn posted_label(&self, now: DateTime<Utc>) -> String {
        match self.days_since_posted(now) {
            0 => "today".to_string(),
            1 => "1 day ago".to_string(),
            n => format!("{} days ago", n),
        }
    }
}
