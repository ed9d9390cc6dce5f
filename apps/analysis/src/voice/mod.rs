//! Voice and delivery analysis of one transcript segment.
//!
//! Every sub-analysis reads the raw text: fillers, pauses, and delivery
//! markers live in exactly the words the sentiment tokenizer throws away.

pub mod delivery;
pub mod fillers;
pub mod pace;
pub mod pauses;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub use delivery::{assess_delivery, DeliveryReport, IndicatorScore};
pub use fillers::{detect_fillers, FillerReport};
pub use pace::{calculate_pace, PaceCategory, SpeakingPace};
pub use pauses::{analyze_pauses, PauseReport};

use crate::util::round_dp;

const EXCELLENT_THRESHOLD: f64 = 0.8;
const GOOD_THRESHOLD: f64 = 0.6;
/// Penalty multiplier applied to the filler-to-word ratio.
const FILLER_PENALTY: f64 = 5.0;
const OFF_PACE_SCORE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityRating {
    Excellent,
    Good,
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Composite score in [0, 1], 3 dp.
    pub score: f64,
    pub rating: QualityRating,
}

impl QualityScore {
    /// Rates a raw composite score against the shared quality thresholds.
    pub(crate) fn from_raw(score: f64) -> Self {
        let rating = if score > EXCELLENT_THRESHOLD {
            QualityRating::Excellent
        } else if score > GOOD_THRESHOLD {
            QualityRating::Good
        } else {
            QualityRating::NeedsImprovement
        };
        QualityScore {
            score: round_dp(score, 3),
            rating,
        }
    }
}

/// Full voice envelope for one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceAnalysis {
    pub timestamp: Value,
    pub speaking_pace: SpeakingPace,
    pub filler_words: FillerReport,
    pub pauses: PauseReport,
    pub delivery: DeliveryReport,
    pub overall_quality: QualityScore,
}

/// Analyzes vocal delivery for one transcript segment.
///
/// `duration_seconds` is the measured speech duration when the caller has
/// one; without it the pace falls back to an assumed conversational rate.
pub fn analyze_voice(text: &str, timestamp: Value, duration_seconds: Option<f64>) -> VoiceAnalysis {
    let speaking_pace = calculate_pace(text, duration_seconds);
    let filler_words = detect_fillers(text);
    let pauses = analyze_pauses(text);
    let delivery = assess_delivery(text);
    let overall_quality = overall_quality(&speaking_pace, &filler_words, &delivery);

    debug!(
        "voice analysis: {} words, {} fillers, {:.1} wpm, quality {:.3}",
        speaking_pace.word_count, filler_words.total, speaking_pace.words_per_minute,
        overall_quality.score
    );

    VoiceAnalysis {
        timestamp,
        speaking_pace,
        filler_words,
        pauses,
        delivery,
        overall_quality,
    }
}

/// Composite voice quality: the mean of a pace score, a filler penalty, and
/// the delivery confidence and clarity scores shifted into [0, 1].
fn overall_quality(
    pace: &SpeakingPace,
    fillers: &FillerReport,
    delivery: &DeliveryReport,
) -> QualityScore {
    let pace_score = if pace.pace == PaceCategory::Normal {
        1.0
    } else {
        OFF_PACE_SCORE
    };
    let filler_ratio = fillers.total as f64 / pace.word_count.max(1) as f64;
    let filler_score = (1.0 - filler_ratio * FILLER_PENALTY).max(0.0);
    let confidence_score = (delivery.confidence.score + 1.0) / 2.0;
    let clarity_score = (delivery.clarity.score + 1.0) / 2.0;

    QualityScore::from_raw((pace_score + filler_score + confidence_score + clarity_score) / 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_confident_answer_rates_excellent() {
        // 8 words in 3 seconds = 160 wpm; no fillers; a quarter of the
        // words are confidence markers and a quarter clarity markers, so
        // the composite lands above the excellent threshold.
        let text = "First we definitely improved, then we clearly measured.";
        let analysis = analyze_voice(text, json!(1), Some(3.0));
        assert_eq!(analysis.speaking_pace.pace, PaceCategory::Normal);
        assert_eq!(analysis.filler_words.total, 0);
        assert_eq!(analysis.overall_quality.rating, QualityRating::Excellent);
    }

    #[test]
    fn test_filler_heavy_answer_is_penalized() {
        let text = "um so like um you know um it was like fine";
        let clean = analyze_voice("it was fine and done quickly today", json!(1), None);
        let messy = analyze_voice(text, json!(1), None);
        assert!(
            messy.overall_quality.score < clean.overall_quality.score,
            "messy {} should score below clean {}",
            messy.overall_quality.score,
            clean.overall_quality.score
        );
    }

    #[test]
    fn test_filler_penalty_floors_at_zero() {
        // Every word is a filler: the ratio times the penalty exceeds 1.
        let analysis = analyze_voice("um um um um", json!(1), Some(2.0));
        assert!(analysis.overall_quality.score >= 0.0);
        assert_eq!(
            analysis.overall_quality.rating,
            QualityRating::NeedsImprovement
        );
    }

    #[test]
    fn test_empty_text_is_total() {
        let analysis = analyze_voice("", json!(null), None);
        assert_eq!(analysis.speaking_pace.word_count, 0);
        assert_eq!(analysis.filler_words.total, 0);
        assert_eq!(analysis.pauses.total, 0);
    }

    #[test]
    fn test_timestamp_passes_through() {
        let analysis = analyze_voice("fine", json!("2026-08-04T10:00:00Z"), None);
        assert_eq!(analysis.timestamp, json!("2026-08-04T10:00:00Z"));
    }

    #[test]
    fn test_quality_rating_serializes_snake_case() {
        let wire = serde_json::to_value(QualityRating::NeedsImprovement).unwrap();
        assert_eq!(wire, "needs_improvement");
    }

    #[test]
    fn test_off_pace_answer_loses_quality() {
        // 4 words in 60 seconds = 4 wpm, far below the slow threshold.
        let slow = analyze_voice("we shipped the cache", json!(1), Some(60.0));
        let normal = analyze_voice("we shipped the cache", json!(1), None);
        assert!(slow.overall_quality.score < normal.overall_quality.score);
    }
}
