use async_trait::async_trait;

use jobhub_firestore::{FirestoreClient, JobRepository};
use jobhub_models::{Job, JobId, JobInput};

use super::{BackendResult, JobBackend};

/// Jobs stored in the Firestore `jobs` collection.
#[derive(Clone)]
pub struct FirestoreJobBackend {
    repo: JobRepository,
}

impl FirestoreJobBackend {
    pub fn new(client: FirestoreClient) -> Self {
        Self {
            repo: JobRepository::new(client),
        }
    }
}

#[async_trait]
impl JobBackend for FirestoreJobBackend {
    async fn fetch_all(&self) -> BackendResult<Vec<Job>> {
        Ok(self.repo.list_all().await?)
    }

    async fn create(&self, input: &JobInput) -> BackendResult<JobId> {
        Ok(self.repo.create(input).await?)
    }

    async fn update(&self, id: &JobId, input: &JobInput) -> BackendResult<()> {
        Ok(self.repo.update(id, input).await?)
    }

    async fn delete(&self, id: &JobId) -> BackendResult<()> {
        Ok(self.repo.delete(id).await?)
    }
}
