/// Strips characters that would break a search query string.
///
/// Keeps letters, digits, whitespace and hyphens; everything else
/// (quotes, control characters, punctuation) is dropped before the value
/// is interpolated into the `q=` parameter. Whitespace runs, including
/// any CR/LF that survive the filter, collapse to single spaces.
pub fn sanitize_search_term(term: &str) -> String {
    term.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips CR/LF from a value destined for an HTTP header.
///
/// Stored and derived strings (tokens, client credentials) must never
/// introduce header injection.
pub fn sanitize_header_value(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect()
}

/// Builds the catalog search query for a song/artist pair.
pub fn build_search_query(song: &str, artist: &str) -> String {
    format!(
        "{} artist:{}",
        sanitize_search_term(song),
        sanitize_search_term(artist)
    )
}
