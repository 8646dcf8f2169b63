//! Keyword extraction — turns free text into an ordered, de-duplicated keyword list.

use std::collections::HashSet;

/// Upper bound on the number of keywords kept per text.
pub const MAX_KEYWORDS: usize = 50;

/// Tokens of this many bytes or fewer are never keywords.
const MIN_TOKEN_LEN: usize = 2;

/// Closed list of common English function words ignored during extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "this", "that", "these", "those", "i", "you",
    "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

/// Returns true if `token` is in the stop-word list.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extracts keywords from `text`.
///
/// Lowercases, replaces everything except ASCII word chars (`[A-Za-z0-9_]`)
/// and whitespace with spaces, splits on whitespace, drops short tokens and
/// stop words, then de-duplicates keeping first occurrence order and
/// truncates to [`MAX_KEYWORDS`].
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .filter(|token| token.len() > MIN_TOKEN_LEN && !is_stop_word(token))
        .filter(|token| seen.insert(*token))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
