//! Parser for raw generative-model output.
//!
//! The model is asked to answer with one `"Song - Artist"` line per track.
//! Anything that does not match that shape is skipped silently; the model
//! occasionally wraps its list in prose and those lines are simply not
//! suggestions.

use crate::types::Suggestion;

/// Parses a block of model output into ordered suggestions.
///
/// Each non-empty trimmed line is split on the first `" - "` occurrence:
/// everything before it is the song, everything after is the artist. A
/// title like `"Twenty One Pilots - Ride - Radio Edit"` therefore keeps
/// the full remainder as the artist field, which matches how the model is
/// prompted to format single-hyphen-separated titles. Lines without the
/// separator, or with an empty half, yield nothing. Order is preserved and
/// duplicates are retained.
pub fn parse_suggestions(text: &str) -> Vec<Suggestion> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let (song, artist) = line.split_once(" - ")?;
            let song = song.trim();
            let artist = artist.trim();
            if song.is_empty() || artist.is_empty() {
                return None;
            }
            Some(Suggestion::new(song, artist))
        })
        .collect()
}
