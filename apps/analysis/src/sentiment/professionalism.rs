//! Professional-register scoring over the filtered token stream.

use serde::{Deserialize, Serialize};

use crate::lexicon;
use crate::sentiment::scoring::Level;
use crate::util::round_dp;

const HIGH_THRESHOLD: f64 = 0.15;
const MEDIUM_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalismReport {
    /// Share of tokens drawn from the professional vocabulary, 3 dp.
    pub score: f64,
    pub level: Level,
    pub professional_words: usize,
}

/// Ratio of professional-vocabulary tokens to all tokens.
/// The `max(1)` guard keeps empty input at a zero score.
pub fn assess_professionalism(tokens: &[String]) -> ProfessionalismReport {
    let professional_words = tokens
        .iter()
        .filter(|t| lexicon::is_professional(t))
        .count();
    let score = professional_words as f64 / tokens.len().max(1) as f64;

    let level = if score > HIGH_THRESHOLD {
        Level::High
    } else if score > MEDIUM_THRESHOLD {
        Level::Medium
    } else {
        Level::Low
    };

    ProfessionalismReport {
        score: round_dp(score, 3),
        level,
        professional_words,
    }
}
