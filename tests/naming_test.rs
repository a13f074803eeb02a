use chrono::NaiveDate;
use moodlist::naming::{mood_label, playlist_description, playlist_name};
use moodlist::types::PlaylistRequest;

fn request(mood: &str, genres: &[&str], era: &str) -> PlaylistRequest {
    PlaylistRequest {
        mood: mood.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        era: era.to_string(),
        additional_preferences: String::new(),
    }
}

#[test]
fn test_mood_label_table() {
    assert_eq!(mood_label("energico"), "Energetic");
    assert_eq!(mood_label("feliz"), "Happy");
    assert_eq!(mood_label("focado"), "Focused");
    assert_eq!(mood_label("somethingelse"), "Custom");
    assert_eq!(mood_label(""), "Custom");
}

#[test]
fn test_playlist_name_interpolates_label_and_date() {
    let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let name = playlist_name(&request("energico", &["rock"], "anos-80"), date);
    assert_eq!(name, "Moodlist Energetic 05-08");
}

#[test]
fn test_playlist_name_unknown_mood_is_custom() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    let name = playlist_name(&request("vaporwave", &[], ""), date);
    assert_eq!(name, "Moodlist Custom 31-01");
}

#[test]
fn test_playlist_name_is_deterministic() {
    let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let req = request("relaxado", &[], "");
    assert_eq!(playlist_name(&req, date), playlist_name(&req, date));
}

#[test]
fn test_description_interpolates_preferences() {
    let description = playlist_description(&request("energico", &["rock", "metal"], "anos-80"));
    assert_eq!(
        description,
        "AI-generated playlist by Moodlist. Mood: energico. Genres: rock, metal. Era: anos-80."
    );
}

#[test]
fn test_description_fallbacks() {
    let description = playlist_description(&request("", &[], ""));
    assert_eq!(
        description,
        "AI-generated playlist by Moodlist. Mood: custom. Genres: various genres. Era: all eras."
    );
}
