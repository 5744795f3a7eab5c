//! Typed repository for job postings.
//!
//! Jobs live in the top-level `jobs` collection, written by the web client
//! with camelCase field names. `datePosted` is stored as an ISO-8601 string
//! (what the web client writes), so that is what this repository writes too.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{info, warn};

use jobhub_models::{Job, JobId, JobInput, WorkMode};

use crate::client::FirestoreClient;
use crate::error::{FirestoreError, FirestoreResult};
use crate::metrics::record_skipped;
use crate::types::{Document, ToFirestoreValue, Value};

/// Collection holding every job posting.
pub const JOBS_COLLECTION: &str = "jobs";

/// Wire field names.
pub mod fields {
    pub const TITLE: &str = "jobTitle";
    pub const COMPANY: &str = "companyName";
    pub const EXPERIENCE: &str = "experience";
    pub const LOCATION: &str = "location";
    pub const DESCRIPTION: &str = "jobDescription";
    pub const SKILLS: &str = "jobSkills";
    pub const OPENINGS: &str = "numberOfOpenings";
    pub const WORK_MODE: &str = "workMode";
    pub const SALARY: &str = "salary";
    pub const DATE_POSTED: &str = "datePosted";
    pub const POSTED_BY: &str = "postedBy";

    /// Fields an edit may overwrite; posting date and author stay as created.
    pub const EDITABLE: &[&str] = &[
        TITLE,
        COMPANY,
        EXPERIENCE,
        LOCATION,
        DESCRIPTION,
        SKILLS,
        OPENINGS,
        WORK_MODE,
        SALARY,
    ];
}

/// Repository for job documents.
#[derive(Clone)]
pub struct JobRepository {
    client: FirestoreClient,
}

impl JobRepository {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    /// Fetch every job posting.
    ///
    /// Documents that cannot be decoded are skipped with a warning instead of
    /// failing the whole fetch.
    pub async fn list_all(&self) -> FirestoreResult<Vec<Job>> {
        let documents = self.client.list_all_documents(JOBS_COLLECTION).await?;
        let total = documents.len();

        let jobs: Vec<Job> = documents
            .iter()
            .filter_map(|doc| match document_to_job(doc) {
                Ok(job) => Some(job),
                Err(e) => {
                    warn!(document = ?doc.name, "Skipping undecodable job document: {}", e);
                    record_skipped(JOBS_COLLECTION);
                    None
                }
            })
            .collect();

        info!(total, decoded = jobs.len(), "Fetched job postings");
        Ok(jobs)
    }

    /// Create a job and return the identifier Firestore assigned.
    ///
    /// Not retried: an auto-ID create that timed out may still have landed.
    pub async fn create(&self, input: &JobInput) -> FirestoreResult<JobId> {
        let doc = self
            .client
            .create_document(JOBS_COLLECTION, None, job_input_to_fields(input))
            .await?;

        let id = doc
            .id()
            .map(JobId::from)
            .ok_or_else(|| FirestoreError::invalid_response("Created document has no name"))?;

        info!(job_id = %id, "Created job posting");
        Ok(id)
    }

    /// Overwrite the editable fields of an existing job.
    pub async fn update(&self, id: &JobId, input: &JobInput) -> FirestoreResult<()> {
        let mut fields = job_input_to_fields(input);
        fields.retain(|k, _| fields::EDITABLE.contains(&k.as_str()));
        let mask: Vec<String> = fields::EDITABLE.iter().map(|f| f.to_string()).collect();

        self.client
            .with_retry("update_job", || {
                self.client
                    .update_document(JOBS_COLLECTION, id.as_str(), fields.clone(), Some(mask.clone()))
            })
            .await?;

        info!(job_id = %id, "Updated job posting");
        Ok(())
    }

    /// Delete a job. Deleting a missing job succeeds.
    pub async fn delete(&self, id: &JobId) -> FirestoreResult<()> {
        self.client
            .with_retry("delete_job", || {
                self.client.delete_document(JOBS_COLLECTION, id.as_str())
            })
            .await?;

        info!(job_id = %id, "Deleted job posting");
        Ok(())
    }
}

/// Encode a job payload as Firestore fields.
pub fn job_input_to_fields(input: &JobInput) -> HashMap<String, Value> {
    let mut map = HashMap::new();
    map.insert(fields::TITLE.to_string(), input.title.to_firestore_value());
    map.insert(fields::COMPANY.to_string(), input.company_name.to_firestore_value());
    map.insert(fields::EXPERIENCE.to_string(), input.experience.to_firestore_value());
    map.insert(fields::LOCATION.to_string(), input.location.to_firestore_value());
    map.insert(fields::DESCRIPTION.to_string(), input.description.to_firestore_value());
    map.insert(fields::SKILLS.to_string(), input.skills.to_firestore_value());
    map.insert(fields::OPENINGS.to_string(), input.openings.to_firestore_value());
    map.insert(fields::WORK_MODE.to_string(), input.work_mode.as_str().to_firestore_value());
    map.insert(fields::SALARY.to_string(), input.salary.to_firestore_value());
    map.insert(
        fields::DATE_POSTED.to_string(),
        input
            .posted_at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .to_firestore_value(),
    );
    map.insert(fields::POSTED_BY.to_string(), input.posted_by.to_firestore_value());
    map
}

/// Decode a job document.
pub fn document_to_job(doc: &Document) -> FirestoreResult<Job> {
    let id = doc
        .id()
        .map(JobId::from)
        .ok_or_else(|| FirestoreError::invalid_response("Job document has no name"))?;

    if doc.fields.is_none() {
        return Err(FirestoreError::invalid_response(format!("Job {} has no fields", id)));
    }

    let get_string = |key: &str| -> String { doc.get::<String>(key).unwrap_or_default() };

    let work_mode: WorkMode = doc
        .get::<String>(fields::WORK_MODE)
        .ok_or_else(|| FirestoreError::invalid_response(format!("Job {} has no workMode", id)))?
        .parse()
        .map_err(|e| FirestoreError::invalid_response(format!("Job {}: {}", id, e)))?;

    let posted_at = doc
        .get::<DateTime<Utc>>(fields::DATE_POSTED)
        .or_else(|| {
            doc.create_time
                .as_deref()
                .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
                .map(Into::into)
        })
        .ok_or_else(|| FirestoreError::invalid_response(format!("Job {} has no datePosted", id)))?;

    Ok(Job {
        title: get_string(fields::TITLE),
        company_name: get_string(fields::COMPANY),
        experience: get_string(fields::EXPERIENCE),
        location: get_string(fields::LOCATION),
        description: get_string(fields::DESCRIPTION),
        skills: doc.get::<Vec<String>>(fields::SKILLS).unwrap_or_default(),
        openings: doc.get::<u32>(fields::OPENINGS).unwrap_or(1),
        work_mode,
        salary: get_string(fields::SALARY),
        posted_at,
        posted_by: get_string(fields::POSTED_BY),
        id,
    })
}
