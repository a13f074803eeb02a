//! Moodlist Library
//!
//! This library turns free-text mood, genre and era preferences into a real
//! Spotify playlist. A generative model proposes tracks as plain
//! `"Song - Artist"` lines, which are parsed, resolved against the Spotify
//! catalog and materialized as a playlist on the linked user account.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading and the injected `Config` struct
//! - `error` - Pipeline error taxonomy
//! - `management` - Token store and credential provider
//! - `model` - Generative-model client producing track suggestions
//! - `naming` - Playlist name and description generation
//! - `pipeline` - The playlist materialization pipeline
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `suggestions` - Parser for raw model output
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use moodlist::config;
//!
//! #[tokio::main]
//! async fn main() -> moodlist::Res<()> {
//!     config::load_env().await?;
//!     let cfg = config::Config::from_env()?;
//!     // Build the pipeline and materialize a playlist...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod server;
pub mod spotify;
pub mod suggestions;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for CLI and server plumbing
/// using a boxed dynamic error trait object while maintaining Send + Sync
/// bounds for async contexts. Pipeline components use the dedicated
/// [`error::PipelineError`] taxonomy instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching track {}/{}", index, total);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist created: {}", url);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro will cause the program to exit immediately after printing the
/// error message. It should only be used at the outermost CLI boundary where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, like a failed token refresh where the stale
/// token is still usable, or a track that could not be found on Spotify.
///
/// # Example
///
/// ```
/// warning!("Token refresh failed, keeping stored token: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
