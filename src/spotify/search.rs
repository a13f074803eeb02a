//! Catalog track resolution.

use crate::{
    types::{Credential, ResolvedTrack, SearchResponse, Suggestion},
    utils, warning,
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Searches the catalog for one suggestion, trusting the provider's
    /// top relevance result.
    ///
    /// Failures never propagate: an empty result set, a non-success
    /// response and a transport or parse error all collapse into a
    /// `found = false` record whose display fields fall back to the
    /// original suggestion.
    pub async fn search_track(
        &self,
        suggestion: &Suggestion,
        credential: &Credential,
    ) -> ResolvedTrack {
        let query = utils::build_search_query(&suggestion.song, &suggestion.artist);
        let api_url = format!(
            "{uri}/search?q={q}&type=track&limit=1",
            uri = self.config.api_url,
            q = urlencoding::encode(&query),
        );

        let response = match self
            .http
            .get(&api_url)
            .bearer_auth(utils::sanitize_header_value(&credential.token))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warning!("Search request failed for '{}': {}", suggestion.raw, e);
                return ResolvedTrack::not_found(suggestion.clone());
            }
        };

        if !response.status().is_success() {
            warning!(
                "Search for '{}' answered {}",
                suggestion.raw,
                response.status()
            );
            return ResolvedTrack::not_found(suggestion.clone());
        }

        match response.json::<SearchResponse>().await {
            Ok(parsed) => match parsed.tracks.items.into_iter().next() {
                Some(track) => ResolvedTrack::found(suggestion.clone(), track),
                None => ResolvedTrack::not_found(suggestion.clone()),
            },
            Err(e) => {
                warning!("Malformed search response for '{}': {}", suggestion.raw, e);
                ResolvedTrack::not_found(suggestion.clone())
            }
        }
    }
}
