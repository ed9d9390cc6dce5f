//! Sentiment analysis of one transcript segment: keyword-weighted scoring,
//! professionalism, and word statistics wrapped in a single envelope.

pub mod professionalism;
pub mod scoring;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub use professionalism::{assess_professionalism, ProfessionalismReport};
pub use scoring::{score_text, score_tokens, Level, ScoreResult, SentimentCategory};

use crate::tokenize::tokenize;
use crate::util::round_dp;

/// How many of the most frequent tokens the word stats report.
const MOST_COMMON_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStats {
    /// Raw whitespace-separated words in the original text.
    pub total_words: usize,
    /// Tokens surviving stop-word and length filtering.
    pub filtered_words: usize,
    pub most_common: Vec<WordFrequency>,
}

/// Full sentiment envelope for one segment. The timestamp is opaque: it is
/// echoed back exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub timestamp: Value,
    pub scores: ScoreResult,
    /// Magnitude of the normalized sentiment, regardless of direction.
    pub intensity: f64,
    pub professionalism: ProfessionalismReport,
    pub word_stats: WordStats,
    /// The surviving tokens rejoined, for display alongside the original.
    pub filtered_text: String,
}

/// Analyzes one transcript segment.
///
/// Total over all inputs: empty or stop-word-only text produces a
/// zero-valued neutral envelope.
pub fn analyze_sentiment(text: &str, timestamp: Value) -> SentimentAnalysis {
    let tokens = tokenize(text);
    let scores = score_tokens(&tokens);
    let professionalism = assess_professionalism(&tokens);
    let word_stats = compute_word_stats(text, &tokens);

    debug!(
        "scored segment: {} raw words, {} tokens, sentiment {:.2} ({:?})",
        word_stats.total_words,
        tokens.len(),
        scores.sentiment,
        scores.category
    );

    SentimentAnalysis {
        timestamp,
        intensity: round_dp(scores.sentiment.abs(), 2),
        professionalism,
        word_stats,
        filtered_text: tokens.join(" "),
        scores,
    }
}

/// Counts raw and filtered words and ranks the most frequent tokens.
/// Ties are broken lexicographically so the ranking is deterministic.
fn compute_word_stats(text: &str, tokens: &[String]) -> WordStats {
    let total_words = text.split_whitespace().count();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(MOST_COMMON_LIMIT);

    WordStats {
        total_words,
        filtered_words: tokens.len(),
        most_common: ranked
            .into_iter()
            .map(|(word, count)| WordFrequency {
                word: word.to_string(),
                count,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timestamp_passes_through_unmodified() {
        let envelope = analyze_sentiment("great answer", json!({"epoch_ms": 1722790800000i64}));
        assert_eq!(envelope.timestamp, json!({"epoch_ms": 1722790800000i64}));
    }

    #[test]
    fn test_empty_text_yields_zero_envelope() {
        let envelope = analyze_sentiment("", json!(0));
        assert_eq!(envelope.scores.sentiment, 0.0);
        assert_eq!(envelope.intensity, 0.0);
        assert_eq!(envelope.word_stats.total_words, 0);
        assert_eq!(envelope.word_stats.filtered_words, 0);
        assert!(envelope.word_stats.most_common.is_empty());
        assert!(envelope.filtered_text.is_empty());
    }

    #[test]
    fn test_intensity_is_magnitude_of_sentiment() {
        let envelope = analyze_sentiment("terrible terrible terrible", json!(1));
        assert_eq!(envelope.scores.sentiment, -3.0);
        assert_eq!(envelope.intensity, 3.0);
    }

    #[test]
    fn test_word_stats_count_raw_and_filtered_words() {
        let envelope = analyze_sentiment("I delivered a strong, strong result", json!(1));
        assert_eq!(envelope.word_stats.total_words, 6);
        // i/a dropped by length: delivered, strong, strong, result remain.
        assert_eq!(envelope.word_stats.filtered_words, 4);
    }

    #[test]
    fn test_most_common_ranks_by_count_then_word() {
        let envelope =
            analyze_sentiment("kafka kafka kafka redis redis consul vault nomad", json!(1));
        let ranked: Vec<(&str, usize)> = envelope
            .word_stats
            .most_common
            .iter()
            .map(|f| (f.word.as_str(), f.count))
            .collect();
        assert_eq!(ranked.len(), MOST_COMMON_LIMIT);
        assert_eq!(ranked[0], ("kafka", 3));
        assert_eq!(ranked[1], ("redis", 2));
        // Singles tie; lexicographic order keeps the ranking stable.
        assert_eq!(ranked[2], ("consul", 1));
        assert_eq!(ranked[3], ("nomad", 1));
        assert_eq!(ranked[4], ("vault", 1));
    }

    #[test]
    fn test_filtered_text_rejoins_tokens() {
        let envelope = analyze_sentiment("The database migration was painless", json!(1));
        assert_eq!(envelope.filtered_text, "database migration painless");
    }

    #[test]
    fn test_envelope_serializes_with_wire_names() {
        let envelope = analyze_sentiment("excellent work", json!(42));
        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(wire["timestamp"], json!(42));
        assert_eq!(wire["scores"]["category"], "positive");
        assert_eq!(wire["scores"]["confidence_level"], "medium");
    }
}
