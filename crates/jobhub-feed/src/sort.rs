//! Feed ordering: newest posting first.

use jobhub_models::Job;

/// Sort newest first. Stable, so equal timestamps keep their input order.
pub fn sort_newest_first(jobs: &mut [&Job]) {
    jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
}
