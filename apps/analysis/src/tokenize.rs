//! Transcript tokenizer feeding the scoring tables.

use crate::lexicon;

/// Tokens shorter than this are dropped: one- and two-letter fragments are
/// almost always articles, contraction debris, or vocal tics.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Lowercases the text, replaces every non-word character with a space,
/// splits on whitespace, and drops short tokens and stop words.
///
/// The result is a finite, restartable sequence: callers may iterate it as
/// many times as they like. Empty input yields an empty vector, never an
/// error.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS && !lexicon::is_stop_word(t))
        .map(str::to_owned)
        .collect()
}
