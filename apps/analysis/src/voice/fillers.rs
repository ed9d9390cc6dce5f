//! Filler-word detection over raw transcript text.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon;

lazy_static! {
    /// One compiled word-boundary pattern per filler phrase.
    static ref FILLER_PATTERNS: Vec<(&'static str, Regex)> = lexicon::FILLER_PHRASES
        .iter()
        .map(|phrase| {
            let pattern = format!(r"\b{}\b", regex::escape(phrase));
            (
                *phrase,
                Regex::new(&pattern).expect("filler patterns are static and valid"),
            )
        })
        .collect();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerReport {
    pub total: usize,
    /// Distinct filler phrases that appeared at least once.
    pub unique: usize,
    /// Ordered phrase-to-count map; only phrases that occurred are listed.
    pub breakdown: BTreeMap<String, usize>,
}

/// Counts filler phrases in the lowercased text. Word boundaries prevent
/// partial matches ("er" never matches inside "her").
pub fn detect_fillers(text: &str) -> FillerReport {
    let lowered = text.to_lowercase();
    let mut breakdown = BTreeMap::new();
    let mut total = 0;

    for (phrase, pattern) in FILLER_PATTERNS.iter() {
        let hits = pattern.find_iter(&lowered).count();
        if hits > 0 {
            breakdown.insert((*phrase).to_string(), hits);
            total += hits;
        }
    }

    FillerReport {
        total,
        unique: breakdown.len(),
        breakdown,
    }
}
