use moodlist::suggestions::parse_suggestions;

#[test]
fn test_parses_well_formed_lines_in_order() {
    let output = "Imagine - John Lennon\nnotasong\nHey Jude - The Beatles";
    let suggestions = parse_suggestions(output);

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].song, "Imagine");
    assert_eq!(suggestions[0].artist, "John Lennon");
    assert_eq!(suggestions[1].song, "Hey Jude");
    assert_eq!(suggestions[1].artist, "The Beatles");
}

#[test]
fn test_raw_is_reconstructable() {
    let suggestions = parse_suggestions("  Bohemian Rhapsody  -  Queen  ");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].raw, "Bohemian Rhapsody - Queen");
    assert_eq!(
        suggestions[0].raw,
        format!("{} - {}", suggestions[0].song, suggestions[0].artist)
    );
}

#[test]
fn test_splits_on_first_separator() {
    // Multi-hyphen titles keep everything after the first " - " as the
    // artist field.
    let suggestions = parse_suggestions("Twenty One Pilots - Ride - Radio Edit");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].song, "Twenty One Pilots");
    assert_eq!(suggestions[0].artist, "Ride - Radio Edit");
}

#[test]
fn test_skips_lines_without_separator() {
    let output = "Here are some songs:\n\nBlank-Hyphen NoSpaces\nReal Song - Real Artist\n";
    let suggestions = parse_suggestions(output);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].song, "Real Song");
}

#[test]
fn test_skips_lines_with_empty_halves() {
    assert!(parse_suggestions(" - Artist Only").is_empty());
    // the trailing separator disappears when the line is trimmed
    assert!(parse_suggestions("Song Only - ").is_empty());
    assert!(parse_suggestions("   ").is_empty());
    assert!(parse_suggestions("").is_empty());
}

#[test]
fn test_duplicates_are_retained() {
    let output = "Imagine - John Lennon\nImagine - John Lennon";
    let suggestions = parse_suggestions(output);
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0], suggestions[1]);
}

#[test]
fn test_hyphen_without_spaces_is_not_a_separator() {
    let suggestions = parse_suggestions("What's My Age Again - Blink-182");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].song, "What's My Age Again");
    assert_eq!(suggestions[0].artist, "Blink-182");
}
