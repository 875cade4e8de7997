use std::collections::BTreeSet;

/// Delimiters separating phrases in a free-text ingredient list.
const PHRASE_DELIMITERS: [char; 3] = [',', ';', '\n'];

/// Canonicalize one phrase.
///
/// Rules:
/// - Lowercase
/// - Anything outside `[a-z0-9 ]` becomes a space
/// - Whitespace runs collapse to one space, ends trimmed
///
/// Returns an empty string when nothing survives; callers drop those.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => ' ',
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a comma, semicolon or newline delimited list into normalized phrases.
/// Empty phrases are dropped; order and duplicates are kept.
pub fn split_phrases(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(PHRASE_DELIMITERS)
        .map(normalize)
        .filter(|phrase| !phrase.is_empty())
}

/// Distinct tokens of an already normalized phrase.
pub fn tokens(phrase: &str) -> BTreeSet<&str> {
    phrase.split_whitespace().collect()
}
