//! Pause metrics inferred from punctuation and sentence structure.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::util::round_dp;

lazy_static! {
    static ref SENTENCE_SPLIT: Regex =
        Regex::new(r"[.!?]+").expect("sentence pattern is static and valid");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauseReport {
    pub total: usize,
    /// Pauses per 100 raw words, 2 dp.
    pub per_100_words: f64,
    pub commas: usize,
    pub periods: usize,
    pub semicolons: usize,
    pub dashes: usize,
    pub ellipses: usize,
    pub sentences: usize,
    /// Raw words divided by sentence count, 2 dp.
    pub avg_sentence_length: f64,
}

/// Derives pause metrics from punctuation counts. A period inside an
/// ellipsis counts for both tallies; the fields are independent signals,
/// not a partition.
pub fn analyze_pauses(text: &str) -> PauseReport {
    let commas = text.matches(',').count();
    let periods = text.matches('.').count();
    let semicolons = text.matches(';').count();
    let dashes = text.matches("--").count() + text.matches('\u{2014}').count();
    let ellipses = text.matches("...").count();

    let sentences = SENTENCE_SPLIT.split(text).count();
    let words = text.split_whitespace().count();

    let total = commas + periods + semicolons + dashes + ellipses;
    let per_100_words = round_dp(total as f64 / words.max(1) as f64 * 100.0, 2);
    let avg_sentence_length = round_dp(words as f64 / sentences.max(1) as f64, 2);

    PauseReport {
        total,
        per_100_words,
        commas,
        periods,
        semicolons,
        dashes,
        ellipses,
        sentences,
        avg_sentence_length,
    }
}
