//! In-memory job store.
//!
//! The single owned copy of the jobs the feed operates on. It only changes
//! once the backend has confirmed a write.

use serde::{Deserialize, Serialize};

use jobhub_models::{Job, JobId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStore {
    jobs: Vec<Job>,
    /// Bumped on every change; usable as a memoization key.
    version: u64,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents.
    pub fn load(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        self.version += 1;
    }

    /// Append a job the backend has just created.
    pub fn insert(&mut self, job: Job) {
        self.jobs.push(job);
        self.version += 1;
    }

    /// Replace the job with the same id in place. Returns `false` when absent.
    pub fn replace(&mut self, job: Job) -> bool {
        match self.jobs.iter_mut().find(|j| j.id == job.id) {
            Some(slot) => {
                *slot = job;
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Remove every job with this id. Absence is not an error.
    pub fn remove(&mut self, id: &JobId) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|j| &j.id != id);
        let removed = self.jobs.len() != before;
        if removed {
            self.version += 1;
        }
        removed
    }

    pub fn get(&self, id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| &j.id == id)
    }

    pub fn contains(&self, id: &JobId) -> bool {
        self.get(id).is_some()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
