//! Job fixtures for unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use jobhub_models::{Job, JobId, WorkMode};

/// Fixed reference instant so posting ages are deterministic.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn job(id: &str, title: &str) -> Job {
    JobBuilder::new(id).title(title).build()
}

pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            job: Job {
                id: JobId::from(id),
                title: format!("Job {}", id),
                company_name: "Acme Corp".to_string(),
                experience: "1-3 years".to_string(),
                location: "Bengaluru, Karnataka".to_string(),
                description: "Description".to_string(),
                skills: vec!["React".to_string()],
                openings: 1,
                work_mode: WorkMode::Remote,
                salary: "₹5,00,000 - ₹8,00,000".to_string(),
                posted_at: now(),
                posted_by: "emp-1".to_string(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.job.title = title.to_string();
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.job.company_name = company.to_string();
        self
    }

    pub fn experience(mut self, experience: &str) -> Self {
        self.job.experience = experience.to_string();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.job.location = location.to_string();
        self
    }

    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.job.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn work_mode(mut self, work_mode: WorkMode) -> Self {
        self.job.work_mode = work_mode;
        self
    }

    pub fn salary(mut self, salary: &str) -> Self {
        self.job.salary = salary.to_string();
        self
    }

    pub fn days_ago(mut self, days: i64) -> Self {
        self.job.posted_at = now() - Duration::days(days);
        self
    }

    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.job.posted_at = now() - Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}
