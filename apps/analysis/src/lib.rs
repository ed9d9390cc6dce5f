//! Deterministic analysis engine for mock-interview transcripts.
//!
//! The core is a lexical scoring engine: a pure function from free text to
//! normalized sentiment and confidence scores driven by static
//! keyword-weight tables, plus a trend classifier over score series.
//! Around it sit the companion analyses the interview product reports on:
//! professionalism, vocal delivery (fillers, pauses, pace), simulated
//! facial readings, and session-level summaries.
//!
//! Everything is synchronous and stateless aside from the static tables;
//! callers may invoke any entry point from any number of threads. Results
//! are plain `serde`-serializable values carrying the caller's opaque
//! timestamp, ready to be relayed as part of a JSON API response.

pub mod facial;
pub mod lexicon;
pub mod report;
pub mod sentiment;
pub mod summary;
pub mod tokenize;
pub mod trend;
pub mod voice;

pub(crate) mod util;

pub use facial::{simulate_expression, FacialAnalysis};
pub use report::{analyze_comprehensive, ComprehensiveReport};
pub use sentiment::{
    analyze_sentiment, score_text, score_tokens, Level, ScoreResult, SentimentAnalysis,
    SentimentCategory,
};
pub use summary::{
    summarize_facial, summarize_sentiment, summarize_voice, FacialSummary, SentimentSummary,
    VoiceSummary,
};
pub use tokenize::tokenize;
pub use trend::{classify_trend, TrendDirection};
pub use voice::{analyze_voice, QualityRating, VoiceAnalysis};
