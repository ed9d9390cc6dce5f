//! Speaking-pace estimation.

use serde::{Deserialize, Serialize};

use crate::util::round_dp;

/// Assumed conversational rate when no real duration is supplied.
pub const ASSUMED_WPM: f64 = 180.0;
const SLOW_WPM: f64 = 120.0;
const FAST_WPM: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceCategory {
    Slow,
    Normal,
    Fast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakingPace {
    /// Words per minute, 1 dp.
    pub words_per_minute: f64,
    pub word_count: usize,
    /// The caller-supplied duration, echoed back.
    pub duration_seconds: Option<f64>,
    /// True when no usable duration was supplied and the rate is assumed.
    pub estimated: bool,
    pub pace: PaceCategory,
}

/// Computes words per minute from the actual speech duration when one is
/// supplied. Without a positive duration the rate falls back to the assumed
/// conversational speed, which reports as exactly 180.0 wpm for any
/// non-empty text and 0.0 for empty text.
pub fn calculate_pace(text: &str, duration_seconds: Option<f64>) -> SpeakingPace {
    let word_count = text.split_whitespace().count();

    let (wpm, estimated) = match duration_seconds {
        Some(duration) if duration > 0.0 => (word_count as f64 / duration * 60.0, false),
        _ => {
            let wpm = if word_count == 0 { 0.0 } else { ASSUMED_WPM };
            (wpm, true)
        }
    };

    let pace = if wpm < SLOW_WPM {
        PaceCategory::Slow
    } else if wpm > FAST_WPM {
        PaceCategory::Fast
    } else {
        PaceCategory::Normal
    };

    SpeakingPace {
        words_per_minute: round_dp(wpm, 1),
        word_count,
        duration_seconds,
        estimated,
        pace,
    }
}
