//! Playlist name and description generation.
//!
//! Pure functions: the current date is a parameter, so output is fully
//! determined by the request.

use chrono::NaiveDate;

use crate::types::PlaylistRequest;

/// Fixed mood-to-label table. Moods arrive in the form the preference UI
/// submits them; anything unrecognized maps to "Custom".
const MOOD_LABELS: &[(&str, &str)] = &[
    ("feliz", "Happy"),
    ("relaxado", "Relaxed"),
    ("energico", "Energetic"),
    ("melancolico", "Melancholic"),
    ("motivado", "Motivated"),
    ("nostalgico", "Nostalgic"),
    ("romantico", "Romantic"),
    ("focado", "Focused"),
];

pub fn mood_label(mood: &str) -> &'static str {
    MOOD_LABELS
        .iter()
        .find(|(key, _)| *key == mood)
        .map(|(_, label)| *label)
        .unwrap_or("Custom")
}

/// Builds the playlist title, e.g. `"Moodlist Energetic 05-08"`.
pub fn playlist_name(request: &PlaylistRequest, today: NaiveDate) -> String {
    format!(
        "Moodlist {} {}",
        mood_label(&request.mood),
        today.format("%d-%m")
    )
}

/// Builds the playlist description from the preference tuple.
pub fn playlist_description(request: &PlaylistRequest) -> String {
    let mood = if request.mood.is_empty() {
        "custom"
    } else {
        &request.mood
    };
    let genres = if request.genres.is_empty() {
        "various genres".to_string()
    } else {
        request.genres.join(", ")
    };
    let era = if request.era.is_empty() {
        "all eras"
    } else {
        &request.era
    };

    format!(
        "AI-generated playlist by Moodlist. Mood: {}. Genres: {}. Era: {}.",
        mood, genres, era
    )
}
