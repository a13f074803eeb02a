//! # Spotify Integration Module
//!
//! HTTP client layer for the two Spotify collaborators the pipeline talks
//! to: the accounts service (token exchange, refresh, client credentials)
//! and the Web API (search, user profile, playlist creation and
//! population).
//!
//! ## Modules
//!
//! - [`auth`] - Accounts-service client and the [`IdentityApi`] capability
//! - [`search`] - Catalog track resolution with sanitized queries
//! - [`playlist`] - Playlist creation, track attachment, current user
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - all three OAuth grant types
//! - `GET /me` - current user id for playlist ownership
//! - `GET /search?q=…&type=track&limit=1` - top-relevance track lookup
//! - `POST /users/{user_id}/playlists` - create playlist
//! - `POST /playlists/{playlist_id}/tracks` - bulk attach tracks
//!
//! All bearer tokens and Basic-auth credentials are CR/LF-stripped before
//! they reach a header value. Endpoint bases come from the injected
//! [`Config`](crate::config::Config); nothing here reads the environment.

pub mod auth;
pub mod playlist;
pub mod search;

pub use auth::AccountsClient;
pub use auth::IdentityApi;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::Config,
    error::PipelineError,
    types::{Credential, ResolvedTrack, Suggestion},
};

/// Spotify Web API client.
///
/// Holds one connection pool for the whole run; endpoint bases and
/// credentials come from the injected configuration.
pub struct SpotifyClient {
    pub(crate) http: Client,
    pub(crate) config: Arc<Config>,
}

impl SpotifyClient {
    pub fn new(config: Arc<Config>) -> Self {
        SpotifyClient {
            http: Client::new(),
            config,
        }
    }
}

/// Catalog and playlist operations the materializer depends on.
///
/// Implemented by [`SpotifyClient`]; the pipeline is generic over this
/// trait so its ordering and failure policies can be exercised without a
/// network.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Resolves one suggestion to a catalog track. Never fails: any
    /// search error collapses into a `found = false` record.
    async fn resolve_track(&self, suggestion: &Suggestion, credential: &Credential)
    -> ResolvedTrack;

    /// Resolves the current user id from the credential.
    async fn current_user_id(&self, credential: &Credential) -> Result<String, PipelineError>;

    /// Creates an empty public playlist and returns its id.
    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        credential: &Credential,
    ) -> Result<String, PipelineError>;

    /// Attaches tracks to a playlist in one bulk call, preserving order.
    async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
        credential: &Credential,
    ) -> Result<(), PipelineError>;
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn resolve_track(
        &self,
        suggestion: &Suggestion,
        credential: &Credential,
    ) -> ResolvedTrack {
        self.search_track(suggestion, credential).await
    }

    async fn current_user_id(&self, credential: &Credential) -> Result<String, PipelineError> {
        Ok(self.current_user(credential).await?.id)
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        credential: &Credential,
    ) -> Result<String, PipelineError> {
        self.create_playlist_for_user(user_id, name, description, credential)
            .await
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
        credential: &Credential,
    ) -> Result<(), PipelineError> {
        self.add_tracks_to_playlist(playlist_id, uris, credential)
            .await
    }
}
