//! Comprehensive per-segment report combining all three analyses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::facial::{simulate_expression, FacialAnalysis};
use crate::sentiment::{analyze_sentiment, SentimentAnalysis};
use crate::voice::{analyze_voice, VoiceAnalysis};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveReport {
    pub timestamp: Value,
    pub sentiment: SentimentAnalysis,
    pub voice: VoiceAnalysis,
    pub facial: FacialAnalysis,
}

/// Runs sentiment, voice, and facial analysis for one segment and wraps
/// them under the shared timestamp. The timestamp is echoed at the top
/// level and inside each nested envelope, mirroring how the per-analysis
/// entry points behave when called on their own.
pub fn analyze_comprehensive(
    text: &str,
    timestamp: Value,
    duration_seconds: Option<f64>,
    image_data: Option<&str>,
) -> ComprehensiveReport {
    ComprehensiveReport {
        sentiment: analyze_sentiment(text, timestamp.clone()),
        voice: analyze_voice(text, timestamp.clone(), duration_seconds),
        facial: simulate_expression(timestamp.clone(), image_data),
        timestamp,
    }
}
