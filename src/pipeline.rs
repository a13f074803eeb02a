//! The playlist materialization pipeline.
//!
//! One run is strictly sequential: acquire a credential, create the empty
//! playlist, resolve each suggestion against the catalog with a fixed
//! pacing delay, then attach every resolved URI in one bulk call. Once
//! tracks begin attaching there is no rollback; a created-but-empty
//! playlist is a valid, observable outcome.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::time::sleep;

use crate::{
    config::Config,
    error::PipelineError,
    info,
    management::CredentialSource,
    naming,
    spotify::Catalog,
    types::{MaterializedPlaylist, PlaylistRequest, ResolvedTrack, Suggestion},
    warning,
};

/// Rate-limit discipline between catalog calls.
///
/// A fixed small delay per call keeps a 20-track run under the provider's
/// rate limits without adaptive backoff. Tests inject [`Pacing::none`].
#[derive(Debug, Clone)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    pub fn new(delay: Duration) -> Self {
        Pacing { delay }
    }

    pub fn none() -> Self {
        Pacing {
            delay: Duration::ZERO,
        }
    }

    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

/// Orchestrates one pipeline run from suggestions to a populated playlist.
pub struct PlaylistMaterializer<C, P> {
    catalog: C,
    credentials: P,
    config: Arc<Config>,
    pacing: Pacing,
}

impl<C: Catalog, P: CredentialSource> PlaylistMaterializer<C, P> {
    pub fn new(catalog: C, credentials: P, config: Arc<Config>) -> Self {
        let pacing = Pacing::new(config.search_delay);
        PlaylistMaterializer {
            catalog,
            credentials,
            config,
            pacing,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Materializes the suggestions as a playlist on the user's account.
    ///
    /// Playlist creation happens before any track resolution, so resolver
    /// calls are never wasted on a run that cannot create its playlist.
    /// Individual suggestions that fail to resolve are skipped; only a
    /// fully empty resolved set aborts, with the created playlist left
    /// empty.
    pub async fn materialize(
        &self,
        suggestions: &[Suggestion],
        request: &PlaylistRequest,
    ) -> Result<MaterializedPlaylist, PipelineError> {
        let credential = self.credentials.acquire().await?;
        if !credential.is_user() {
            return Err(PipelineError::NoCredential);
        }

        let name = naming::playlist_name(request, Utc::now().date_naive());
        let description = naming::playlist_description(request);

        let user_id = match &self.config.user_id {
            Some(id) => id.clone(),
            None => self.catalog.current_user_id(&credential).await?,
        };

        let playlist_id = self
            .catalog
            .create_playlist(&user_id, &name, &description, &credential)
            .await?;
        info!("Created playlist '{}' ({})", name, playlist_id);

        let mut uris: Vec<String> = Vec::new();
        for (index, suggestion) in suggestions.iter().enumerate() {
            info!(
                "Searching track {}/{}: {}",
                index + 1,
                suggestions.len(),
                suggestion.raw
            );
            let resolved = self.catalog.resolve_track(suggestion, &credential).await;
            if let ResolvedTrack {
                found: true,
                catalog_uri: Some(uri),
                name,
                artist,
                ..
            } = resolved
            {
                info!("Found: {} - {}", name, artist);
                uris.push(uri);
            } else {
                warning!("Not found on Spotify: {}", suggestion.raw);
            }
            self.pacing.pause().await;
        }

        if uris.is_empty() {
            return Err(PipelineError::EmptyResult);
        }

        info!("Found {}/{} tracks on Spotify", uris.len(), suggestions.len());
        self.catalog
            .add_tracks(&playlist_id, &uris, &credential)
            .await?;

        Ok(MaterializedPlaylist {
            public_url: format!("{}/playlist/{}", self.config.public_url, playlist_id),
            track_count: uris.len(),
            id: playlist_id,
        })
    }
}
