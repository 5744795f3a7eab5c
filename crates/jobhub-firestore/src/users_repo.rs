//! User profile lookups.
//!
//! Registration writes `users/{uid}` with the chosen `role`; the job board
//! only needs that role to decide whether to offer job posting.

use tracing::{debug, warn};

use jobhub_models::UserRole;

use crate::client::FirestoreClient;
use crate::error::FirestoreResult;

pub const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct UserRepository {
    client: FirestoreClient,
}

impl UserRepository {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    /// Role of a registered user.
    ///
    /// `None` when the profile does not exist or carries no recognizable role.
    pub async fn fetch_role(&self, uid: &str) -> FirestoreResult<Option<UserRole>> {
        let doc = self
            .client
            .with_retry("get_user", || self.client.get_document(USERS_COLLECTION, uid))
            .await?;

        let Some(doc) = doc else {
            debug!(uid = %uid, "No user profile");
            return Ok(None);
        };

        match doc.get::<String>("role") {
            Some(raw) => match raw.parse::<UserRole>() {
                Ok(role) => Ok(Some(role)),
                Err(e) => {
                    warn!(uid = %uid, "Ignoring user role: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }
}
