//! Filter evaluation.
//!
//! A job is kept when every active predicate passes. Within the skills
//! predicate a single shared skill is enough.

use jobhub_models::{canonical_city, normalize_search, parse_experience, parse_salary, Job};

use crate::filter::FilterState;

/// Jobs matching `filters`, in store order.
pub fn evaluate<'a>(jobs: &'a [Job], filters: &FilterState) -> Vec<&'a Job> {
    let query = normalize_search(&filters.search);
    jobs.iter()
        .filter(|job| matches_normalized(job, filters, &query))
        .collect()
}

/// Whether a single job passes every active predicate.
pub fn matches(job: &Job, filters: &FilterState) -> bool {
    matches_normalized(job, filters, &normalize_search(&filters.search))
}

fn matches_normalized(job: &Job, filters: &FilterState, query: &str) -> bool {
    matches_search(job, query)
        && filters.experience.admits(parse_experience(&job.experience))
        && parse_salary(&job.salary).overlaps(filters.salary_min, filters.salary_max)
        && matches_location(job, &filters.locations)
        && matches_any_skill(job, &filters.skills)
        && filters.work_mode.admits(job.work_mode)
}

fn matches_search(job: &Job, query: &str) -> bool {
    query.is_empty()
        || normalize_search(&job.title).contains(query)
        || normalize_search(&job.company_name).contains(query)
}

fn matches_location(job: &Job, locations: &[String]) -> bool {
    if locations.is_empty() {
        return true;
    }
    let city = canonical_city(&job.location);
    locations.iter().any(|l| l == city)
}

fn matches_any_skill(job: &Job, skills: &[String]) -> bool {
    skills.is_empty() || skills.iter().any(|skill| job.skills.contains(skill))
}
