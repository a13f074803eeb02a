//! Configuration management for Moodlist.
//!
//! Configuration is loaded once from environment variables (optionally
//! seeded from a `.env` file in the local data directory) into an explicit
//! [`Config`] struct that is injected into every component constructor.
//! Nothing reads the environment after startup.

use std::{env, path::PathBuf, time::Duration};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Runtime configuration for all pipeline components.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client id.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// OAuth redirect URI; must match the Spotify application settings.
    pub redirect_uri: String,
    /// Scopes requested during authorization. Must include playlist-modify
    /// and profile-read permissions for the pipeline to work.
    pub scope: String,
    /// Pre-configured Spotify user id for playlist creation. When absent,
    /// the pipeline resolves the current user from the credential.
    pub user_id: Option<String>,
    /// Spotify Web API base URL.
    pub api_url: String,
    /// Spotify authorize endpoint.
    pub auth_url: String,
    /// Spotify token endpoint.
    pub token_url: String,
    /// Public base for playlist links shown to the user.
    pub public_url: String,
    /// Bind address of the local OAuth callback server.
    pub server_addr: String,
    /// API key for the generative model. Only required by `generate`.
    pub model_api_key: Option<String>,
    /// Model identifier used for track suggestions.
    pub model: String,
    /// Fixed delay between catalog search calls.
    pub search_delay: Duration,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Spotify client credentials are required; everything else falls back
    /// to a sensible default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let search_delay_ms = match env::var("TRACK_SEARCH_DELAY_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| ConfigError::Invalid("TRACK_SEARCH_DELAY_MS", e.to_string()))?,
            Err(_) => 100,
        };

        Ok(Config {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: or_default(
                "SPOTIFY_REDIRECT_URI",
                "http://127.0.0.1:8080/callback",
            ),
            scope: or_default(
                "SPOTIFY_SCOPE",
                "playlist-modify-public playlist-modify-private user-read-private",
            ),
            user_id: env::var("SPOTIFY_USER_ID").ok().filter(|v| !v.is_empty()),
            api_url: or_default("SPOTIFY_API_URL", "https://api.spotify.com/v1"),
            auth_url: or_default("SPOTIFY_AUTH_URL", "https://accounts.spotify.com/authorize"),
            token_url: or_default(
                "SPOTIFY_TOKEN_URL",
                "https://accounts.spotify.com/api/token",
            ),
            public_url: or_default("SPOTIFY_PUBLIC_URL", "https://open.spotify.com"),
            server_addr: or_default("SERVER_ADDRESS", "127.0.0.1:8080"),
            model_api_key: env::var("CLAUDE_API_KEY").ok().filter(|v| !v.is_empty()),
            model: or_default("CLAUDE_MODEL", "claude-3-haiku-20240307"),
            search_delay: Duration::from_millis(search_delay_ms),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Loads environment variables from a `.env` file in the local data
/// directory.
///
/// Creates the directory structure if needed and loads variables from
/// `moodlist/.env` under the platform-specific local data directory:
/// - Linux: `~/.local/share/moodlist/.env`
/// - macOS: `~/Library/Application Support/moodlist/.env`
/// - Windows: `%LOCALAPPDATA%/moodlist/.env`
///
/// A missing file is not an error; variables already present in the
/// process environment take priority anyway.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodlist/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
