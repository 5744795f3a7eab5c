//! Filter state, the editable draft behind the filter panel, and the options
//! the panel offers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use jobhub_models::{canonical_city, leading_integer, Job, WorkMode, WorkModeParseError};

use crate::error::{FeedError, FeedResult};

/// Upper end of the salary slider, in LPA.
pub const SALARY_FILTER_MAX_LPA: f64 = 100.0;

// =============================================================================
// Experience
// =============================================================================

/// Experience bucket selected in the panel.
///
/// Stored in its text form (`""`, `"2"`, `"5"`, `"5+"`) so it reads the same
/// in serialized state and in summaries. Only the exact text `"5+"` is an
/// at-least bucket; any other value caps experience at its leading integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceFilter {
    #[default]
    Any,
    /// Parsed experience at most this many years.
    AtMost(i64),
    /// Parsed experience of five years or more.
    FivePlus,
}

const FIVE_PLUS: &str = "5+";

impl ExperienceFilter {
    /// Choices offered by the filter panel.
    pub const OPTIONS: [ExperienceFilter; 4] = [
        ExperienceFilter::Any,
        ExperienceFilter::AtMost(2),
        ExperienceFilter::AtMost(5),
        ExperienceFilter::FivePlus,
    ];

    pub fn is_any(&self) -> bool {
        matches!(self, ExperienceFilter::Any)
    }

    /// Whether a job with this parsed experience passes.
    pub fn admits(&self, years: f64) -> bool {
        match *self {
            ExperienceFilter::Any => true,
            ExperienceFilter::AtMost(max) => years <= max as f64,
            ExperienceFilter::FivePlus => years >= 5.0,
        }
    }

    /// Panel label for this choice.
    pub fn label(&self) -> String {
        match self {
            ExperienceFilter::Any => "All Experience".to_string(),
            ExperienceFilter::AtMost(2) => "0-2 years".to_string(),
            ExperienceFilter::AtMost(5) => "2-5 years".to_string(),
            ExperienceFilter::AtMost(n) => format!("Up to {} years", n),
            ExperienceFilter::FivePlus => "5+ years".to_string(),
        }
    }
}

/// Lenient: `"5+"` is the at-least bucket, a leading integer is at-most, and
/// anything without one places no restriction.
impl From<&str> for ExperienceFilter {
    fn from(raw: &str) -> Self {
        if raw == FIVE_PLUS {
            return ExperienceFilter::FivePlus;
        }
        match leading_integer(raw) {
            Some(n) => ExperienceFilter::AtMost(n),
            None => ExperienceFilter::Any,
        }
    }
}

impl From<String> for ExperienceFilter {
    fn from(raw: String) -> Self {
        ExperienceFilter::from(raw.as_str())
    }
}

impl From<ExperienceFilter> for String {
    fn from(filter: ExperienceFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for ExperienceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceFilter::Any => Ok(()),
            ExperienceFilter::AtMost(n) => write!(f, "{}", n),
            ExperienceFilter::FivePlus => f.write_str(FIVE_PLUS),
        }
    }
}

// =============================================================================
// Work mode
// =============================================================================

/// Work mode selection: everything, or exactly one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkModeFilter {
    #[default]
    All,
    Only(WorkMode),
}

impl WorkModeFilter {
    pub fn admits(&self, mode: WorkMode) -> bool {
        match self {
            WorkModeFilter::All => true,
            WorkModeFilter::Only(wanted) => *wanted == mode,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkModeFilter::All => "all",
            WorkModeFilter::Only(mode) => mode.as_str(),
        }
    }
}

impl FromStr for WorkModeFilter {
    type Err = WorkModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(WorkModeFilter::All),
            other => other.parse().map(WorkModeFilter::Only),
        }
    }
}

impl TryFrom<String> for WorkModeFilter {
    type Error = WorkModeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WorkModeFilter> for String {
    fn from(filter: WorkModeFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl From<WorkMode> for WorkModeFilter {
    fn from(mode: WorkMode) -> Self {
        WorkModeFilter::Only(mode)
    }
}

impl fmt::Display for WorkModeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Filter state
// =============================================================================

/// The committed predicate the feed is filtered by.
///
/// Locations and skills keep the order they were selected in; membership is
/// all that matters for filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search: String,
    pub experience: ExperienceFilter,
    /// Inclusive bounds in LPA; `salary_min <= salary_max`.
    pub salary_min: f64,
    pub salary_max: f64,
    pub locations: Vec<String>,
    pub skills: Vec<String>,
    pub work_mode: WorkModeFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            experience: ExperienceFilter::Any,
            salary_min: 0.0,
            salary_max: SALARY_FILTER_MAX_LPA,
            locations: Vec::new(),
            skills: Vec::new(),
            work_mode: WorkModeFilter::All,
        }
    }
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True when the salary bounds are narrower than the full slider.
    pub fn salary_is_narrowed(&self) -> bool {
        self.salary_min > 0.0 || self.salary_max < SALARY_FILTER_MAX_LPA
    }
}

// =============================================================================
// Draft
// =============================================================================

/// Editable copy of the filters while the panel is open.
///
/// Nothing here affects the feed until [`FilterDraft::commit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDraft {
    state: FilterState,
}

impl FilterDraft {
    /// Start editing from the currently committed filters.
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> &mut Self {
        self.state.search = search.into();
        self
    }

    pub fn set_experience(&mut self, experience: impl Into<ExperienceFilter>) -> &mut Self {
        self.state.experience = experience.into();
        self
    }

    pub fn set_salary_min(&mut self, min_lpa: f64) -> &mut Self {
        self.state.salary_min = min_lpa;
        self
    }

    pub fn set_salary_max(&mut self, max_lpa: f64) -> &mut Self {
        self.state.salary_max = max_lpa;
        self
    }

    pub fn set_work_mode(&mut self, work_mode: impl Into<WorkModeFilter>) -> &mut Self {
        self.state.work_mode = work_mode.into();
        self
    }

    /// Select the city if unselected, otherwise deselect it.
    pub fn toggle_location(&mut self, city: &str) -> &mut Self {
        toggle(&mut self.state.locations, city);
        self
    }

    /// Select the skill if unselected, otherwise deselect it.
    pub fn toggle_skill(&mut self, skill: &str) -> &mut Self {
        toggle(&mut self.state.skills, skill);
        self
    }

    /// Back to defaults. The committed filters are untouched.
    pub fn reset(&mut self) -> &mut Self {
        self.state = FilterState::default();
        self
    }

    /// Finish editing and produce the filters to apply.
    pub fn commit(self) -> FeedResult<FilterState> {
        let (salary_min, salary_max) = (self.state.salary_min, self.state.salary_max);

        if salary_min > salary_max || salary_min.is_nan() || salary_max.is_nan() {
            return Err(FeedError::InvalidSalaryRange {
                min: salary_min,
                max: salary_max,
            });
        }

        Ok(self.state)
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    match values.iter().position(|v| v == value) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(value.to_string()),
    }
}

// =============================================================================
// Options
// =============================================================================

/// Values the filter panel offers, derived from the loaded jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct skills, in first-seen order
    pub skills: Vec<String>,
    /// Distinct canonical cities, in first-seen order
    pub locations: Vec<String>,
}

impl FilterOptions {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let mut options = Self::default();

        for job in jobs {
            for skill in &job.skills {
                if !options.skills.contains(skill) {
                    options.skills.push(skill.clone());
                }
            }

            let city = canonical_city(&job.location);
            if !city.is_empty() && !options.locations.iter().any(|c| c == city) {
                options.locations.push(city.to_string());
            }
        }

        options
    }
}
