//! Answer normalization for written questions.

/// Characters dropped before comparing answers.
pub const IGNORED_PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', '(', ')'];

/// Canonical form of an answer: punctuation removed, lowercased, trimmed.
///
/// Trimming runs last so that `"word ."` and `"word"` compare equal and the
/// function stays idempotent.
#[must_use]
pub fn normalize(input: &str) -> String {
    let stripped: String = input
        .chars()
        .filter(|c| !IGNORED_PUNCTUATION.contains(c))
        .collect();
    stripped.to_lowercase().trim().to_string()
}

/// Exact equality after normalization. No fuzzy matching.
#[must_use]
pub fn answers_match(given: &str, expected: &str) -> bool {
    normalize(given) == normalize(expected)
}
