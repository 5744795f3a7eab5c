//! Job form input.
//!
//! The post/edit form collects skills as one comma-separated string. Turning
//! a form into a [`JobInput`] splits and trims the skills and stamps the
//! posting time and author.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ModelResult;
use crate::job::{Job, JobInput, WorkMode};
use crate::parse::normalize_skills;
use crate::user::Identity;

/// Work mode preselected on an empty form.
pub const DEFAULT_FORM_WORK_MODE: WorkMode = WorkMode::Hybrid;

/// Raw job form fields as entered by an employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobForm {
    #[validate(length(min = 1, message = "Job title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Experience is required"))]
    pub experience: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Job description is required"))]
    pub description: String,
    /// Comma separated, e.g. "React, JavaScript, HTML"
    pub skills: String,
    #[validate(range(min = 1, message = "At least one opening is required"))]
    pub openings: u32,
    pub work_mode: WorkMode,
    #[validate(length(min = 1, message = "Salary range is required"))]
    pub salary: String,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            company_name: String::new(),
            experience: String::new(),
            location: String::new(),
            description: String::new(),
            skills: String::new(),
            openings: 1,
            work_mode: DEFAULT_FORM_WORK_MODE,
            salary: String::new(),
        }
    }
}

impl JobForm {
    /// Prefill the form for editing an existing job.
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company_name: job.company_name.clone(),
            experience: job.experience.clone(),
            location: job.location.clone(),
            description: job.description.clone(),
            skills: job.skills.join(", "),
            openings: job.openings,
            work_mode: job.work_mode,
            salary: job.salary.clone(),
        }
    }

    /// Build the backend payload.
    ///
    /// Call [`Validate::validate`] first; this conversion does not reject input.
    pub fn into_input(self, identity: &Identity, now: DateTime<Utc>) -> JobInput {
        JobInput {
            skills: normalize_skills(&self.skills),
            title: self.title,
            company_name: self.company_name,
            experience: self.experience,
            location: self.location,
            description: self.description,
            openings: self.openings,
            work_mode: self.work_mode,
            salary: self.salary,
            posted_at: now,
            posted_by: identity.uid_or_anonymous().to_string(),
        }
    }

    /// Validate, then build the backend payload.
    pub fn validated_input(self, identity: &Identity, now: DateTime<Utc>) -> ModelResult<JobInput> {
        self.validate()?;
        Ok(self.into_input(identity, now))
    }
}
