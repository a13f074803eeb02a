use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Capability tier of an access token.
///
/// Playlist creation requires [`TokenTier::UserDelegated`]; an
/// [`TokenTier::ApplicationOnly`] token obtained via the client-credentials
/// grant can only be used for catalog search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTier {
    UserDelegated,
    ApplicationOnly,
}

/// A bearer credential valid for the duration of one pipeline run.
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub tier: TokenTier,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    pub fn is_user(&self) -> bool {
        self.tier == TokenTier::UserDelegated
    }
}

/// The persisted token record, one per linked user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl StoredToken {
    /// Whether the access token should be considered expired. A small skew
    /// keeps a token that expires mid-run from being handed out.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now + chrono::Duration::seconds(60)
    }
}

/// One parsed `"Song - Artist"` line of model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub song: String,
    pub artist: String,
    pub raw: String,
}

impl Suggestion {
    pub fn new(song: impl Into<String>, artist: impl Into<String>) -> Self {
        let song = song.into();
        let artist = artist.into();
        let raw = format!("{} - {}", song, artist);
        Suggestion { song, artist, raw }
    }
}

/// The immutable preference tuple driving suggestion generation and naming.
#[derive(Debug, Clone, Default)]
pub struct PlaylistRequest {
    pub mood: String,
    pub genres: Vec<String>,
    pub era: String,
    pub additional_preferences: String,
}

/// Result of resolving one suggestion against the Spotify catalog.
///
/// When `found` is false the catalog fields are empty and `name`/`artist`
/// fall back to the suggestion's values, so the record is always
/// displayable.
#[derive(Debug, Clone)]
pub struct ResolvedTrack {
    pub suggestion: Suggestion,
    pub catalog_uri: Option<String>,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub preview_url: Option<String>,
    pub external_url: String,
    pub found: bool,
}

impl ResolvedTrack {
    pub fn found(suggestion: Suggestion, track: FullTrack) -> Self {
        let artist = track
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_else(|| suggestion.artist.clone());
        ResolvedTrack {
            suggestion,
            catalog_uri: Some(track.uri),
            name: track.name,
            artist,
            album: track.album.name,
            preview_url: track.preview_url,
            external_url: track.external_urls.spotify,
            found: true,
        }
    }

    pub fn not_found(suggestion: Suggestion) -> Self {
        let name = suggestion.song.clone();
        let artist = suggestion.artist.clone();
        ResolvedTrack {
            suggestion,
            catalog_uri: None,
            name,
            artist,
            album: String::new(),
            preview_url: None,
            external_url: String::new(),
            found: false,
        }
    }
}

/// Terminal output of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedPlaylist {
    pub id: String,
    pub public_url: String,
    pub track_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub token_type: Option<String>,
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<FullTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FullTrack {
    pub name: String,
    pub uri: String,
    pub preview_url: Option<String>,
    pub artists: Vec<TrackArtist>,
    pub album: AlbumRef,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}
