//! One-line feed summary: which jobs are shown and which filters are active.

use std::fmt;

use crate::filter::{FilterState, WorkModeFilter};
use crate::pagination::page_bounds;
use crate::view::FeedView;

const NO_FILTERS: &str = "No filters applied";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    /// `"1 - 6 of 14"`, or `"0"` when nothing matched.
    pub range: String,
    /// Active filter labels, or a single "No filters applied".
    pub filters: Vec<String>,
}

impl FeedSummary {
    pub fn new(view: &FeedView<'_>, filters: &FilterState) -> Self {
        Self {
            range: range_label(view.filtered_count, view.current_page, view.page_size),
            filters: filter_labels(filters),
        }
    }
}

impl fmt::Display for FeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} jobs | {}", self.range, self.filters.join(", "))
    }
}

/// The range label counts from the page start even past the last page.
fn range_label(total: usize, page: usize, page_size: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    let first = page.saturating_sub(1).saturating_mul(page_size);
    let last = page_bounds(total, page, page_size).end;
    format!("{} - {} of {}", first + 1, last, total)
}

fn filter_labels(filters: &FilterState) -> Vec<String> {
    let mut labels = Vec::new();

    if !filters.search.is_empty() {
        labels.push(format!("Search: \"{}\"", filters.search));
    }
    if !filters.experience.is_any() {
        labels.push(format!("Experience: \"{}\"", filters.experience));
    }
    if filters.salary_is_narrowed() {
        labels.push(format!(
            "Salary: ₹{}L - ₹{}L",
            filters.salary_min, filters.salary_max
        ));
    }
    if !filters.locations.is_empty() {
        labels.push(format!("Location: {}", filters.locations.join(", ")));
    }
    if !filters.skills.is_empty() {
        labels.push(format!("Skills: {}", filters.skills.join(", ")));
    }
    if let WorkModeFilter::Only(mode) = filters.work_mode {
        labels.push(format!("Work Mode: {}", mode));
    }

    if labels.is_empty() {
        labels.push(NO_FILTERS.to_string());
    }
    labels
}
