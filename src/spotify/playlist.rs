//! Playlist creation and population.

use crate::{
    error::PipelineError,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        Credential, UserProfile,
    },
    utils,
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Resolves the id of the user the credential belongs to.
    pub async fn current_user(&self, credential: &Credential) -> Result<UserProfile, PipelineError> {
        let api_url = format!("{}/me", self.config.api_url);
        let response = self
            .http
            .get(&api_url)
            .bearer_auth(utils::sanitize_header_value(&credential.token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PipelineError::UpstreamUnreachable(format!(
                "profile lookup answered {}",
                response.status()
            )));
        }

        Ok(response.json::<UserProfile>().await?)
    }

    /// Creates an empty public playlist owned by `user_id`.
    pub async fn create_playlist_for_user(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        credential: &Credential,
    ) -> Result<String, PipelineError> {
        let api_url = format!("{}/users/{}/playlists", self.config.api_url, user_id);
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: true,
        };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(utils::sanitize_header_value(&credential.token))
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::PlaylistCreateFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::PlaylistCreateFailed(format!(
                "{}: {}",
                status, body
            )));
        }

        let created = response
            .json::<CreatePlaylistResponse>()
            .await
            .map_err(|e| PipelineError::PlaylistCreateFailed(e.to_string()))?;
        Ok(created.id)
    }

    /// Attaches tracks to a playlist in one bulk call. URI order in the
    /// request is the playlist order.
    pub async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
        credential: &Credential,
    ) -> Result<(), PipelineError> {
        let api_url = format!("{}/playlists/{}/tracks", self.config.api_url, playlist_id);
        let body = AddTracksRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(utils::sanitize_header_value(&credential.token))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PipelineError::UpstreamUnreachable(format!(
                "track attach answered {}",
                response.status()
            )));
        }

        response.json::<AddTracksResponse>().await?;
        Ok(())
    }
}
