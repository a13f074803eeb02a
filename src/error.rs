//! Error taxonomy for the playlist materialization pipeline.
//!
//! Individual track resolution failures are not represented here: a track
//! that cannot be found (or whose search request errors) becomes a
//! `ResolvedTrack` with `found = false`. Only pipeline-level failures
//! surface as one of these kinds, and only the CLI boundary turns them
//! into user-facing messages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// Neither a stored user token nor working application credentials.
    #[error("no usable Spotify credential is available")]
    Unavailable,

    /// A credential exists but its tier is insufficient for playlist
    /// creation.
    #[error("playlist creation requires a user-authorized token; run `moodlist auth` first")]
    NoCredential,

    /// Spotify rejected the playlist creation call.
    #[error("Spotify rejected playlist creation: {0}")]
    PlaylistCreateFailed(String),

    /// No suggestion resolved to a catalog URI. The playlist may have been
    /// created and left empty; that is a documented outcome, not a state
    /// requiring cleanup.
    #[error("none of the suggested tracks could be found on Spotify")]
    EmptyResult,

    /// Network or parse failure on an external call, normalized so raw
    /// transport errors never leak past the pipeline boundary.
    #[error("upstream request failed: {0}")]
    UpstreamUnreachable(String),
}

impl From<reqwest::Error> for PipelineError {
    fn from(err: reqwest::Error) -> Self {
        PipelineError::UpstreamUnreachable(err.to_string())
    }
}
