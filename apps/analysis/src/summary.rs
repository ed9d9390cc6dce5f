//! Session-level summaries over a sequence of per-segment envelopes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::facial::FacialAnalysis;
use crate::sentiment::SentimentAnalysis;
use crate::trend::{classify_trend, TrendDirection};
use crate::util::{mean, round_dp};
use crate::voice::VoiceAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub average_sentiment: f64,
    pub average_confidence: f64,
    pub average_professionalism: f64,
    /// Trend of the per-segment sentiment series across the session.
    pub trend: TrendDirection,
    pub segments: usize,
}

/// Averages sentiment envelopes across a session and classifies the trend.
/// Returns `None` for an empty session.
pub fn summarize_sentiment(analyses: &[SentimentAnalysis]) -> Option<SentimentSummary> {
    if analyses.is_empty() {
        return None;
    }

    let sentiments: Vec<f64> = analyses.iter().map(|a| a.scores.sentiment).collect();
    let confidences: Vec<f64> = analyses.iter().map(|a| a.scores.confidence).collect();
    let professionalism: Vec<f64> = analyses.iter().map(|a| a.professionalism.score).collect();

    Some(SentimentSummary {
        average_sentiment: round_dp(mean(&sentiments), 3),
        average_confidence: round_dp(mean(&confidences), 3),
        average_professionalism: round_dp(mean(&professionalism), 3),
        trend: classify_trend(&sentiments),
        segments: analyses.len(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSummary {
    pub average_wpm: f64,
    /// Mean filler-to-word ratio across segments, as a percentage, 2 dp.
    pub average_filler_rate: f64,
    pub average_confidence: f64,
    pub average_clarity: f64,
    pub average_quality: f64,
    pub segments: usize,
}

/// Averages voice envelopes across a session. Returns `None` when empty.
pub fn summarize_voice(analyses: &[VoiceAnalysis]) -> Option<VoiceSummary> {
    if analyses.is_empty() {
        return None;
    }

    let wpm: Vec<f64> = analyses
        .iter()
        .map(|a| a.speaking_pace.words_per_minute)
        .collect();
    let filler_rates: Vec<f64> = analyses
        .iter()
        .map(|a| a.filler_words.total as f64 / a.speaking_pace.word_count.max(1) as f64)
        .collect();
    let confidence: Vec<f64> = analyses.iter().map(|a| a.delivery.confidence.score).collect();
    let clarity: Vec<f64> = analyses.iter().map(|a| a.delivery.clarity.score).collect();
    let quality: Vec<f64> = analyses.iter().map(|a| a.overall_quality.score).collect();

    Some(VoiceSummary {
        average_wpm: round_dp(mean(&wpm), 1),
        average_filler_rate: round_dp(mean(&filler_rates) * 100.0, 2),
        average_confidence: round_dp(mean(&confidence), 3),
        average_clarity: round_dp(mean(&clarity), 3),
        average_quality: round_dp(mean(&quality), 3),
        segments: analyses.len(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacialSummary {
    /// Most frequent primary expression; count ties resolve to the
    /// lexicographically first expression.
    pub dominant_expression: String,
    pub dominant_count: usize,
    pub expression_counts: BTreeMap<String, usize>,
    pub average_engagement: f64,
    pub average_eye_contact: f64,
    pub average_professionalism: f64,
    pub segments: usize,
}

/// Aggregates facial envelopes across a session. Returns `None` when empty.
pub fn summarize_facial(analyses: &[FacialAnalysis]) -> Option<FacialSummary> {
    if analyses.is_empty() {
        return None;
    }

    let mut expression_counts: BTreeMap<String, usize> = BTreeMap::new();
    for analysis in analyses {
        *expression_counts
            .entry(analysis.expression.expression.clone())
            .or_default() += 1;
    }
    let (dominant_expression, dominant_count) = expression_counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(expr, count)| (expr.clone(), *count))
        .unwrap_or_else(|| ("neutral".to_string(), 0));

    let engagement: Vec<f64> = analyses.iter().map(|a| a.engagement.score).collect();
    let eye_contact: Vec<f64> = analyses.iter().map(|a| a.eye_contact.score).collect();
    let professionalism: Vec<f64> = analyses.iter().map(|a| a.professionalism.score).collect();

    Some(FacialSummary {
        dominant_expression,
        dominant_count,
        expression_counts,
        average_engagement: round_dp(mean(&engagement), 3),
        average_eye_contact: round_dp(mean(&eye_contact), 3),
        average_professionalism: round_dp(mean(&professionalism), 3),
        segments: analyses.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facial::simulate_expression;
    use crate::sentiment::analyze_sentiment;
    use crate::voice::analyze_voice;
    use serde_json::json;

    #[test]
    fn test_empty_session_has_no_summary() {
        assert_eq!(summarize_sentiment(&[]), None);
        assert_eq!(summarize_voice(&[]), None);
        assert_eq!(summarize_facial(&[]), None);
    }

    #[test]
    fn test_sentiment_summary_averages_and_trends() {
        // Two flat negative answers followed by two strongly positive ones.
        let analyses = vec![
            analyze_sentiment("terrible answer", json!(1)),
            analyze_sentiment("terrible answer", json!(2)),
            analyze_sentiment("excellent excellent excellent", json!(3)),
            analyze_sentiment("excellent excellent excellent", json!(4)),
        ];
        let summary = summarize_sentiment(&analyses).unwrap();
        assert_eq!(summary.segments, 4);
        assert_eq!(summary.trend, TrendDirection::Improving);
        // (-1.5 - 1.5 + 3.0 + 3.0) / 4
        assert_eq!(summary.average_sentiment, 0.75);
    }

    #[test]
    fn test_single_segment_session_is_stable() {
        let analyses = vec![analyze_sentiment("a fine answer", json!(1))];
        let summary = summarize_sentiment(&analyses).unwrap();
        assert_eq!(summary.trend, TrendDirection::Stable);
        assert_eq!(summary.segments, 1);
    }

    #[test]
    fn test_voice_summary_averages_filler_rate_as_percentage() {
        let analyses = vec![
            // 1 filler over 4 words = 25%.
            analyze_voice("um the deploy finished", json!(1), None),
            // 0 fillers.
            analyze_voice("the deploy finished cleanly", json!(2), None),
        ];
        let summary = summarize_voice(&analyses).unwrap();
        assert_eq!(summary.average_filler_rate, 12.5);
        assert_eq!(summary.average_wpm, 180.0);
        assert_eq!(summary.segments, 2);
    }

    #[test]
    fn test_facial_summary_finds_the_dominant_expression() {
        let analyses: Vec<_> = (0..12)
            .map(|i| simulate_expression(json!(i), None))
            .collect();
        let summary = summarize_facial(&analyses).unwrap();
        assert_eq!(summary.segments, 12);
        assert_eq!(
            summary.expression_counts.values().sum::<usize>(),
            analyses.len()
        );
        assert_eq!(
            summary.expression_counts.get(&summary.dominant_expression),
            Some(&summary.dominant_count)
        );
        assert!(summary
            .expression_counts
            .values()
            .all(|count| *count <= summary.dominant_count));
        assert!((0.0..=1.0).contains(&summary.average_engagement));
    }
}
