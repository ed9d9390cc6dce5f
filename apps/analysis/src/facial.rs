//! Simulated facial-expression readings.
//!
//! The upstream product records webcam frames, but expression recognition
//! never left the mock stage: this module generates range-constrained
//! random readings and marks every envelope `simulated`. Image payloads are
//! acknowledged but not decoded.

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::util::round_dp;
use crate::voice::QualityScore;

pub const EXPRESSIONS: &[&str] = &[
    "neutral",
    "happy",
    "confident",
    "focused",
    "thoughtful",
    "concerned",
    "surprised",
    "confused",
    "nervous",
    "engaged",
];

/// Expressions that read as professionally engaged.
const COMPOSED_EXPRESSIONS: &[&str] = &["confident", "focused", "engaged"];

const SECONDARY_EXPRESSION_CHANCE: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    fn score_range(self) -> (f64, f64) {
        match self {
            EngagementLevel::Low => (0.2, 0.4),
            EngagementLevel::Medium => (0.4, 0.7),
            EngagementLevel::High => (0.7, 0.9),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeContactPattern {
    Poor,
    Intermittent,
    Good,
    Excellent,
}

impl EyeContactPattern {
    fn score_range(self) -> (f64, f64) {
        match self {
            EyeContactPattern::Poor => (0.1, 0.3),
            EyeContactPattern::Intermittent => (0.3, 0.5),
            EyeContactPattern::Good => (0.5, 0.8),
            EyeContactPattern::Excellent => (0.8, 1.0),
        }
    }

    fn is_steady(self) -> bool {
        matches!(self, EyeContactPattern::Good | EyeContactPattern::Excellent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadTilt {
    None,
    SlightLeft,
    SlightRight,
    Forward,
}

const HEAD_TILTS: &[HeadTilt] = &[
    HeadTilt::None,
    HeadTilt::SlightLeft,
    HeadTilt::SlightRight,
    HeadTilt::Forward,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionReading {
    pub expression: String,
    /// Detector confidence in the reading, 3 dp.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementReading {
    pub level: EngagementLevel,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyeContactReading {
    pub pattern: EyeContactPattern,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureReading {
    pub upright: bool,
    pub leaning_forward: bool,
    pub slouching: bool,
    pub head_tilt: HeadTilt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacialAnalysis {
    pub timestamp: Value,
    pub expression: ExpressionReading,
    /// Emotions are often mixed; at most one secondary reading is emitted.
    pub secondary_expressions: Vec<ExpressionReading>,
    pub engagement: EngagementReading,
    pub eye_contact: EyeContactReading,
    pub posture: PostureReading,
    pub professionalism: QualityScore,
    /// Always true until a real recognition backend replaces the simulator.
    pub simulated: bool,
    pub image_processed: bool,
}

/// Produces one simulated facial reading.
///
/// `image_data` is the caller's frame payload (base64 or URL); only its
/// presence is recorded.
pub fn simulate_expression(timestamp: Value, image_data: Option<&str>) -> FacialAnalysis {
    let mut rng = rand::rng();

    let primary_idx = rng.random_range(0..EXPRESSIONS.len());
    let expression = ExpressionReading {
        expression: EXPRESSIONS[primary_idx].to_string(),
        confidence: round_dp(rng.random_range(0.70..0.95), 3),
    };

    let mut secondary_expressions = Vec::new();
    if rng.random::<f64>() < SECONDARY_EXPRESSION_CHANCE {
        // Draw from the remaining expressions by skipping the primary slot.
        let mut idx = rng.random_range(0..EXPRESSIONS.len() - 1);
        if idx >= primary_idx {
            idx += 1;
        }
        secondary_expressions.push(ExpressionReading {
            expression: EXPRESSIONS[idx].to_string(),
            confidence: round_dp(rng.random_range(0.30..0.60), 3),
        });
    }

    let engagement_level = match rng.random_range(0..3) {
        0 => EngagementLevel::Low,
        1 => EngagementLevel::Medium,
        _ => EngagementLevel::High,
    };
    let (lo, hi) = engagement_level.score_range();
    let engagement = EngagementReading {
        level: engagement_level,
        score: round_dp(rng.random_range(lo..hi), 3),
    };

    let pattern = match rng.random_range(0..4) {
        0 => EyeContactPattern::Poor,
        1 => EyeContactPattern::Intermittent,
        2 => EyeContactPattern::Good,
        _ => EyeContactPattern::Excellent,
    };
    let (lo, hi) = pattern.score_range();
    let eye_contact = EyeContactReading {
        pattern,
        score: round_dp(rng.random_range(lo..hi), 3),
    };

    let posture = PostureReading {
        upright: rng.random_bool(0.7),
        leaning_forward: rng.random_bool(0.3),
        slouching: rng.random_bool(0.2),
        head_tilt: HEAD_TILTS[rng.random_range(0..HEAD_TILTS.len())],
    };

    let professionalism = rate_professionalism(&expression, &eye_contact, &posture);

    debug!(
        "simulated facial reading: {} ({:.3}), engagement {:?}",
        expression.expression, expression.confidence, engagement.level
    );

    FacialAnalysis {
        timestamp,
        expression,
        secondary_expressions,
        engagement,
        eye_contact,
        posture,
        professionalism,
        simulated: true,
        image_processed: image_data.is_some(),
    }
}

/// Mean of four fixed posture/expression factors, rated against the shared
/// quality thresholds.
fn rate_professionalism(
    expression: &ExpressionReading,
    eye_contact: &EyeContactReading,
    posture: &PostureReading,
) -> QualityScore {
    let factors = [
        if posture.upright { 1.0 } else { 0.7 },
        if eye_contact.pattern.is_steady() { 1.0 } else { 0.6 },
        if COMPOSED_EXPRESSIONS.contains(&expression.expression.as_str()) {
            1.0
        } else {
            0.8
        },
        if posture.slouching { 0.5 } else { 1.0 },
    ];
    QualityScore::from_raw(factors.iter().sum::<f64>() / factors.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::voice::QualityRating;

    #[test]
    fn test_reading_stays_inside_documented_ranges() {
        for _ in 0..100 {
            let reading = simulate_expression(json!(1), None);
            // Rounding to 3 dp can land exactly on a range endpoint.
            assert!(
                (0.70..=0.95).contains(&reading.expression.confidence),
                "primary confidence {} out of range",
                reading.expression.confidence
            );
            let (lo, hi) = reading.engagement.level.score_range();
            assert!((lo..=hi).contains(&reading.engagement.score));
            let (lo, hi) = reading.eye_contact.pattern.score_range();
            assert!((lo..=hi).contains(&reading.eye_contact.score));
            assert!((0.0..=1.0).contains(&reading.professionalism.score));
        }
    }

    #[test]
    fn test_secondary_expression_never_repeats_the_primary() {
        for _ in 0..200 {
            let reading = simulate_expression(json!(1), None);
            assert!(reading.secondary_expressions.len() <= 1);
            for secondary in &reading.secondary_expressions {
                assert_ne!(secondary.expression, reading.expression.expression);
                assert!((0.30..=0.60).contains(&secondary.confidence));
            }
        }
    }

    #[test]
    fn test_primary_expression_comes_from_the_table() {
        for _ in 0..50 {
            let reading = simulate_expression(json!(1), None);
            assert!(EXPRESSIONS.contains(&reading.expression.expression.as_str()));
        }
    }

    #[test]
    fn test_reading_is_marked_simulated() {
        let reading = simulate_expression(json!(1), None);
        assert!(reading.simulated);
    }

    #[test]
    fn test_image_presence_is_recorded_not_decoded() {
        assert!(!simulate_expression(json!(1), None).image_processed);
        assert!(simulate_expression(json!(1), Some("data:image/png;base64,AAAA")).image_processed);
    }

    #[test]
    fn test_timestamp_passes_through() {
        let reading = simulate_expression(json!({"frame": 7}), None);
        assert_eq!(reading.timestamp, json!({"frame": 7}));
    }

    #[test]
    fn test_professionalism_factors_bound_the_rating() {
        let expression = ExpressionReading {
            expression: "confident".to_string(),
            confidence: 0.9,
        };
        let eye_contact = EyeContactReading {
            pattern: EyeContactPattern::Excellent,
            score: 0.9,
        };
        let posture = PostureReading {
            upright: true,
            leaning_forward: false,
            slouching: false,
            head_tilt: HeadTilt::None,
        };
        let best = rate_professionalism(&expression, &eye_contact, &posture);
        assert_eq!(best.score, 1.0);
        assert_eq!(best.rating, QualityRating::Excellent);

        let slumped = PostureReading {
            upright: false,
            leaning_forward: false,
            slouching: true,
            head_tilt: HeadTilt::Forward,
        };
        let distracted = EyeContactReading {
            pattern: EyeContactPattern::Poor,
            score: 0.2,
        };
        let nervous = ExpressionReading {
            expression: "nervous".to_string(),
            confidence: 0.8,
        };
        // Worst case: (0.7 + 0.6 + 0.8 + 0.5) / 4 = 0.65, still "good";
        // the factor floor keeps the rating off the bottom rung.
        let worst = rate_professionalism(&nervous, &distracted, &slumped);
        assert_eq!(worst.score, 0.65);
        assert_eq!(worst.rating, QualityRating::Good);
    }
}
