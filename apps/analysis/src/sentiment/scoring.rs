//! Keyword-weighted sentiment and confidence scoring.
//!
//! The scorer is a pure function of the token stream and the static tables
//! in [`crate::lexicon`]: no hidden state, no ordering dependency between
//! calls, and total over its input domain. Empty input produces a
//! zero-valued neutral result, never an error.

use serde::{Deserialize, Serialize};

use crate::lexicon;
use crate::tokenize::tokenize;
use crate::util::round_dp;

/// Normalized sentiment above this is positive, below its negation negative.
pub const SENTIMENT_THRESHOLD: f64 = 0.3;
/// Normalized confidence above this is high, below its negation low.
pub const CONFIDENCE_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

/// Three-step level shared by confidence, professionalism, and delivery
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

/// Result of scoring one token stream. Created fresh per input; immutable
/// once returned; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted sum over the positive and negative tables, divided by the
    /// token count. Roughly [-1, 1] in practice but never clamped.
    pub sentiment: f64,
    pub category: SentimentCategory,
    pub positive_words: usize,
    pub negative_words: usize,
    /// Weighted sum over the confidence table, divided by the token count.
    pub confidence: f64,
    pub confidence_level: Level,
    /// Number of tokens that survived filtering.
    pub word_count: usize,
}

/// Scores a pre-tokenized stream.
///
/// Both normalized sums divide by the token count, defined as 0.0 for an
/// empty stream. Category and level thresholds compare the raw value; only
/// the returned scores are rounded (to 2 decimal places).
pub fn score_tokens(tokens: &[String]) -> ScoreResult {
    let mut sentiment_sum = 0i32;
    let mut confidence_sum = 0i32;
    let mut positive_words = 0usize;
    let mut negative_words = 0usize;

    for token in tokens {
        if let Some(weight) = lexicon::positive_weight(token) {
            sentiment_sum += weight;
            positive_words += 1;
        }
        if let Some(weight) = lexicon::negative_weight(token) {
            sentiment_sum += weight;
            negative_words += 1;
        }
        if let Some(weight) = lexicon::confidence_weight(token) {
            confidence_sum += weight;
        }
    }

    let word_count = tokens.len();
    let (sentiment, confidence) = if word_count == 0 {
        (0.0, 0.0)
    } else {
        (
            f64::from(sentiment_sum) / word_count as f64,
            f64::from(confidence_sum) / word_count as f64,
        )
    };

    let category = if sentiment > SENTIMENT_THRESHOLD {
        SentimentCategory::Positive
    } else if sentiment < -SENTIMENT_THRESHOLD {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    };

    let confidence_level = if confidence > CONFIDENCE_THRESHOLD {
        Level::High
    } else if confidence < -CONFIDENCE_THRESHOLD {
        Level::Low
    } else {
        Level::Medium
    };

    ScoreResult {
        sentiment: round_dp(sentiment, 2),
        category,
        positive_words,
        negative_words,
        confidence: round_dp(confidence, 2),
        confidence_level,
        word_count,
    }
}

/// Tokenizes and scores raw text in one step.
pub fn score_text(text: &str) -> ScoreResult {
    score_tokens(&tokenize(text))
}
