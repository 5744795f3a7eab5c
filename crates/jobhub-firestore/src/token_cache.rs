//! Access token handling for Firestore requests.
//!
//! Three credential kinds are supported:
//! - a service account (server-side tooling), refreshed through `gcp_auth`
//!   and cached with a refresh margin
//! - an end-user Firebase ID token handed over by the host application
//! - no credentials at all, for the local emulator

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use gcp_auth::{CustomServiceAccount, TokenProvider};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{FirestoreError, FirestoreResult};

/// Refresh margin: refresh token 60 seconds before expiry.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Conservative token TTL when expiry is unknown (50 minutes).
const TOKEN_DEFAULT_TTL: Duration = Duration::from_secs(50 * 60);

/// OAuth scope for Firestore/Datastore access.
pub const FIRESTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

/// How requests authenticate.
#[derive(Clone)]
pub enum Credentials {
    /// Service account token provider, refreshed on demand.
    ServiceAccount(Arc<dyn TokenProvider>),
    /// Firebase ID token of the signed-in user.
    IdToken(String),
    /// Unauthenticated, e.g. against the emulator.
    None,
}

impl Credentials {
    /// Load the service account named by `GOOGLE_APPLICATION_CREDENTIALS`.
    pub fn service_account_from_env() -> FirestoreResult<Self> {
        let service_account = CustomServiceAccount::from_env().map_err(|e| {
            FirestoreError::auth_error(format!("Failed to load service account: {}", e))
        })?;

        match service_account {
            Some(sa) => Ok(Self::ServiceAccount(Arc::new(sa))),
            None => Err(FirestoreError::auth_error(
                "GOOGLE_APPLICATION_CREDENTIALS not set. \
                 Set it to the path of your service account JSON file.",
            )),
        }
    }

    pub fn id_token(token: impl Into<String>) -> Self {
        Self::IdToken(token.into())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ServiceAccount(_) => write!(f, "Credentials::ServiceAccount"),
            Credentials::IdToken(_) => write!(f, "Credentials::IdToken(<redacted>)"),
            Credentials::None => write!(f, "Credentials::None"),
        }
    }
}

/// Cached token with expiration tracking.
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    /// Still valid with the refresh margin applied.
    fn is_valid(&self) -> bool {
        Instant::now() + TOKEN_REFRESH_MARGIN < self.expires_at
    }

    /// Usable right now, even if a refresh is due.
    fn is_usable(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Token cache with single-flight refresh for service accounts.
pub struct TokenCache {
    credentials: Credentials,
    cache: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            cache: RwLock::new(None),
        }
    }

    /// Invalidate the cached token.
    pub async fn invalidate(&self) {
        let mut cache = self.cache.write().await;
        *cache = None;
    }

    /// Bearer token for the next request, or `None` when unauthenticated.
    pub async fn get_token(&self) -> FirestoreResult<Option<String>> {
        let provider = match &self.credentials {
            Credentials::None => return Ok(None),
            Credentials::IdToken(token) => return Ok(Some(token.clone())),
            Credentials::ServiceAccount(provider) => provider,
        };

        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(Some(cached.access_token.clone()));
                }
            }
        }

        let mut cache = self.cache.write().await;

        // Another task may have refreshed while we waited for the lock
        if let Some(cached) = cache.as_ref() {
            if cached.is_valid() {
                return Ok(Some(cached.access_token.clone()));
            }
        }

        self.refresh_token(provider.as_ref(), &mut cache).await.map(Some)
    }

    async fn refresh_token(
        &self,
        provider: &dyn TokenProvider,
        cache: &mut Option<CachedToken>,
    ) -> FirestoreResult<String> {
        match provider.token(&[FIRESTORE_SCOPE]).await {
            Ok(token) => {
                let access_token = token.as_str().to_string();

                let expires_at = {
                    let now = Utc::now();
                    let exp = token.expires_at();
                    if exp > now {
                        (exp - now)
                            .to_std()
                            .map(|ttl| Instant::now() + ttl)
                            .unwrap_or_else(|_| Instant::now() + TOKEN_DEFAULT_TTL)
                    } else {
                        // Already expired: force a refresh on the next request
                        Instant::now()
                    }
                };

                *cache = Some(CachedToken {
                    access_token: access_token.clone(),
                    expires_at,
                });

                debug!("Refreshed Firestore auth token");
                Ok(access_token)
            }
            Err(e) => {
                if let Some(cached) = cache.as_ref() {
                    if cached.is_usable() {
                        warn!("Token refresh failed, using existing token: {}", e);
                        return Ok(cached.access_token.clone());
                    }
                }

                Err(FirestoreError::auth_error(format!(
                    "Failed to obtain auth token: {}",
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_constants() {
        assert_eq!(TOKEN_REFRESH_MARGIN, Duration::from_secs(60));
        assert_eq!(TOKEN_DEFAULT_TTL, Duration::from_secs(50 * 60));
        assert!(FIRESTORE_SCOPE.contains("datastore"));
    }

    #[tokio::test]
    async fn test_id_token_is_returned_verbatim() {
        let cache = TokenCache::new(Credentials::id_token("user-id-token"));
        assert_eq!(cache.get_token().await.unwrap().as_deref(), Some("user-id-token"));
    }

    #[tokio::test]
    async fn test_no_credentials_yields_no_token() {
        let cache = TokenCache::new(Credentials::None);
        assert!(cache.get_token().await.unwrap().is_none());
    }

    #[test]
    fn test_debug_redacts_id_token() {
        let rendered = format!("{:?}", Credentials::id_token("secret"));
        assert!(!rendered.contains("secret"));
    }
}
