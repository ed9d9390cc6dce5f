//! Delivery confidence and clarity from word-choice markers.
//!
//! Operates on the raw whitespace-split words rather than the filtered
//! token stream: markers like "then" or "maybe" are stop words to the
//! sentiment scorer but meaningful signals for delivery.

use serde::{Deserialize, Serialize};

use crate::lexicon;
use crate::sentiment::scoring::Level;
use crate::util::round_dp;

const CONFIDENCE_LEVEL_THRESHOLD: f64 = 0.02;
const CLARITY_LEVEL_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorScore {
    /// Net marker density over all words, 4 dp.
    pub score: f64,
    pub level: Level,
    pub strong: usize,
    pub weak: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub confidence: IndicatorScore,
    pub clarity: IndicatorScore,
}

/// Scores delivery confidence (assertive vs hedged wording) and clarity
/// (structuring markers vs vague placeholders).
pub fn assess_delivery(text: &str) -> DeliveryReport {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let confidence = indicator_score(
        &words,
        lexicon::STRONG_CONFIDENCE_MARKERS,
        lexicon::WEAK_CONFIDENCE_MARKERS,
        CONFIDENCE_LEVEL_THRESHOLD,
    );
    let clarity = indicator_score(
        &words,
        lexicon::CLEAR_MARKERS,
        lexicon::UNCLEAR_MARKERS,
        CLARITY_LEVEL_THRESHOLD,
    );

    DeliveryReport { confidence, clarity }
}

fn indicator_score(
    words: &[&str],
    strong_markers: &[&str],
    weak_markers: &[&str],
    level_threshold: f64,
) -> IndicatorScore {
    let strong = words.iter().filter(|w| strong_markers.contains(w)).count();
    let weak = words.iter().filter(|w| weak_markers.contains(w)).count();

    let score = (strong as f64 - weak as f64) / words.len().max(1) as f64;
    let level = if score > level_threshold {
        Level::High
    } else if score < -level_threshold {
        Level::Low
    } else {
        Level::Medium
    };

    IndicatorScore {
        score: round_dp(score, 4),
        level,
        strong,
        weak,
    }
}
