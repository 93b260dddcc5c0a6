//! Text helpers shared by the language and punctuation rules.

use regex::Regex;

use crate::error::{ContentGuardError, Result};

/// Returns the match plus up to `window` characters on each side.
///
/// `start` and `len` are byte offsets as reported by `regex`; both are clamped
/// to the text and snapped to character boundaries, so any input is safe.
#[must_use]
pub fn context_window(text: &str, start: usize, len: usize, window: usize) -> &str {
    let start = floor_boundary(text, start);
    let end = floor_boundary(text, start.saturating_add(len));

    let from = text[..start]
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(window)
        .map_or(text.len(), |(i, _)| end + i);

    &text[from..to]
}

fn floor_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Case-insensitive whole-word matcher for a single trigger word.
///
/// # Errors
/// Returns an error if the escaped pattern fails to compile (e.g. size limits).
pub fn word_regex(word: &str) -> Result<Regex> {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(word.trim()));
    Regex::new(&pattern).map_err(|e| ContentGuardError::invalid_pattern(&pattern, e))
}

/// Case-insensitive matcher for a multi-word phrase; any run of whitespace
/// between the words matches.
///
/// # Errors
/// Returns an error if the generated pattern fails to compile.
pub fn phrase_regex(phrase: &str) -> Result<Regex> {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    let pattern = format!(r"(?i)\b{}\b", words.join(r"\s+"));
    Regex::new(&pattern).map_err(|e| ContentGuardError::invalid_pattern(&pattern, e))
}

/// Character count, used for every length threshold.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
#[path = "snippet_tests.rs"]
mod tests;
