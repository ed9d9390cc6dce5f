//! Trend classification over a series of prior scores.

use serde::{Deserialize, Serialize};

use crate::util::mean;

/// Minimum mean shift between the two halves before a series counts as
/// moving at all.
pub const TREND_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

/// Classifies a score series by comparing the mean of its first half to the
/// mean of its second half.
///
/// The first half takes `floor(n / 2)` leading elements; the second half
/// takes the remainder, so it receives the extra element when the length is
/// odd. Series shorter than two elements are always stable.
pub fn classify_trend(series: &[f64]) -> TrendDirection {
    if series.len() < 2 {
        return TrendDirection::Stable;
    }

    let mid = series.len() / 2;
    let shift = mean(&series[mid..]) - mean(&series[..mid]);

    if shift > TREND_THRESHOLD {
        TrendDirection::Improving
    } else if shift < -TREND_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}
