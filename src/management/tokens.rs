//! Token persistence and credential acquisition.
//!
//! The store keeps one record per linked user account; read-modify-write
//! goes through an internal async lock so concurrent runs for the same
//! user cannot race on a refresh. The provider turns stored records (or
//! the client-credentials fallback) into a [`Credential`] for one
//! pipeline run.

use std::{collections::BTreeMap, path::PathBuf};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::{
    error::PipelineError,
    spotify::IdentityApi,
    types::{Credential, StoredToken, TokenTier},
    warning,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Keyed token persistence capability.
///
/// `load(None)` returns the single "current" record when exactly which
/// user to act for is not pre-configured.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self, user_id: Option<&str>) -> Result<Option<StoredToken>, StoreError>;
    async fn upsert(&self, user_id: &str, token: &StoredToken) -> Result<(), StoreError>;
}

/// File-backed token store in the platform data directory.
///
/// All records live in one JSON map keyed by user id. Every operation
/// holds the store lock across its full read-modify-write, which is the
/// serialization contract callers rely on during refresh.
pub struct FileTokenStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new() -> Self {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("moodlist/cache/tokens.json");
        Self::at_path(path)
    }

    pub fn at_path(path: PathBuf) -> Self {
        FileTokenStore {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, StoredToken>, StoreError> {
        match async_fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, records: &BTreeMap<String, StoredToken>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(records)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}

impl Default for FileTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self, user_id: Option<&str>) -> Result<Option<StoredToken>, StoreError> {
        let _guard = self.lock.lock().await;
        let records = self.read_all().await?;
        Ok(match user_id {
            Some(id) => records.get(id).cloned(),
            None => records.into_values().next(),
        })
    }

    async fn upsert(&self, user_id: &str, token: &StoredToken) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;
        records.insert(user_id.to_string(), token.clone());
        self.write_all(&records).await
    }
}

/// Capability: supply a valid bearer credential for one pipeline run.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn acquire(&self) -> Result<Credential, PipelineError>;
}

/// Supplies credentials for the pipeline, preferring a stored
/// user-delegated token and falling back to a client-credentials token.
///
/// One provider instance belongs to one pipeline run: the first
/// acquisition is cached and reused for every subsequent call. Callers
/// whose runs might span token expiry create a fresh provider.
pub struct TokenProvider<S, I> {
    store: S,
    identity: I,
    user_id: Option<String>,
    cached: Mutex<Option<Credential>>,
}

impl<S: TokenStore, I: IdentityApi> TokenProvider<S, I> {
    pub fn new(store: S, identity: I, user_id: Option<String>) -> Self {
        TokenProvider {
            store,
            identity,
            user_id,
            cached: Mutex::new(None),
        }
    }

    async fn acquire_uncached(&self) -> Result<Credential, PipelineError> {
        let stored = match self.store.load(self.user_id.as_deref()).await {
            Ok(stored) => stored,
            Err(e) => {
                warning!("Failed to read token store: {}", e);
                None
            }
        };

        match stored {
            Some(record) => Ok(self.user_credential(record).await),
            None => self.app_credential().await,
        }
    }

    /// Returns the stored user token, refreshing it first when expired.
    /// A failed refresh is logged and the stale token returned; the next
    /// API call surfaces the real failure.
    async fn user_credential(&self, stored: StoredToken) -> Credential {
        let now = Utc::now();

        if stored.is_expired(now) {
            if let Some(refresh_token) = stored.refresh_token.clone() {
                match self.identity.refresh(&refresh_token).await {
                    Ok(response) => {
                        let updated = StoredToken {
                            user_id: stored.user_id.clone(),
                            access_token: response.access_token,
                            // Spotify may rotate the refresh token; keep the
                            // old one when it does not.
                            refresh_token: response.refresh_token.or(Some(refresh_token)),
                            expires_at: now + Duration::seconds(response.expires_in as i64),
                        };
                        if let Err(e) = self.store.upsert(&updated.user_id, &updated).await {
                            warning!("Failed to persist refreshed token: {}", e);
                        }
                        return Credential {
                            token: updated.access_token,
                            tier: TokenTier::UserDelegated,
                            expires_at: updated.expires_at,
                        };
                    }
                    Err(e) => {
                        warning!("Token refresh failed, keeping stored token: {}", e);
                    }
                }
            }
        }

        Credential {
            token: stored.access_token,
            tier: TokenTier::UserDelegated,
            expires_at: stored.expires_at,
        }
    }

    async fn app_credential(&self) -> Result<Credential, PipelineError> {
        match self.identity.client_credentials().await {
            Ok(response) => Ok(Credential {
                token: response.access_token,
                tier: TokenTier::ApplicationOnly,
                expires_at: Utc::now() + Duration::seconds(response.expires_in as i64),
            }),
            Err(e) => {
                warning!("Client credentials exchange failed: {}", e);
                Err(PipelineError::Unavailable)
            }
        }
    }
}

#[async_trait]
impl<S: TokenStore, I: IdentityApi> CredentialSource for TokenProvider<S, I> {
    async fn acquire(&self) -> Result<Credential, PipelineError> {
        let mut cached = self.cached.lock().await;
        if let Some(credential) = cached.as_ref() {
            return Ok(credential.clone());
        }
        let credential = self.acquire_uncached().await?;
        *cached = Some(credential.clone());
        Ok(credential)
    }
}
