//! User identity and roles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stamped onto jobs created without a signed-in user.
pub const ANONYMOUS_UID: &str = "anonymous";

/// Who is acting on the feed, as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    Authenticated { uid: String },
    #[default]
    Anonymous,
}

impl Identity {
    pub fn authenticated(uid: impl Into<String>) -> Self {
        Self::Authenticated { uid: uid.into() }
    }

    pub fn uid(&self) -> Option<&str> {
        match self {
            Identity::Authenticated { uid } => Some(uid),
            Identity::Anonymous => None,
        }
    }

    /// The uid to stamp on created jobs.
    pub fn uid_or_anonymous(&self) -> &str {
        self.uid().unwrap_or(ANONYMOUS_UID)
    }
}

/// Account type chosen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Applicant,
    Employer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Applicant => "applicant",
            UserRole::Employer => "employer",
        }
    }

    /// Only employers see the "Add Job" entry point.
    pub fn can_post_jobs(&self) -> bool {
        matches!(self, UserRole::Employer)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "applicant" => Ok(UserRole::Applicant),
            "employer" => Ok(UserRole::Employer),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown user role: {0}")]
pub struct RoleParseError(pub String);
