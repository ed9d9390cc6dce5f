//! Static word tables backing the lexical scoring engine.
//!
//! Every table is a hand-authored constant: lowercase tokens mapped to small
//! signed integer weights, or plain marker sets. Tables are immutable and
//! embedded in the crate; scoring is a pure function of input text and these
//! constants.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

/// Positive sentiment words. All weights are > 0.
pub const POSITIVE_WEIGHTS: &[(&str, i32)] = &[
    ("excellent", 3),
    ("outstanding", 3),
    ("amazing", 3),
    ("fantastic", 3),
    ("exceptional", 3),
    ("great", 2),
    ("good", 2),
    ("best", 2),
    ("love", 2),
    ("strong", 2),
    ("impressive", 2),
    ("solid", 2),
    ("effective", 2),
    ("successful", 2),
    ("accomplished", 2),
    ("achieved", 2),
    ("delivered", 2),
    ("improved", 2),
    ("skilled", 2),
    ("capable", 2),
    ("passionate", 2),
    ("motivated", 2),
    ("proud", 2),
    ("confident", 2),
    ("enjoy", 1),
    ("enjoyed", 1),
    ("interesting", 1),
    ("positive", 1),
    ("happy", 1),
    ("comfortable", 1),
    ("learned", 1),
    ("growth", 1),
    ("opportunity", 1),
];

/// Negative sentiment words. All weights are < 0.
pub const NEGATIVE_WEIGHTS: &[(&str, i32)] = &[
    ("terrible", -3),
    ("horrible", -3),
    ("awful", -3),
    ("worst", -3),
    ("hate", -2),
    ("bad", -2),
    ("poor", -2),
    ("weak", -2),
    ("failed", -2),
    ("failure", -2),
    ("mistake", -2),
    ("wrong", -2),
    ("frustrated", -2),
    ("worried", -2),
    ("stressed", -2),
    ("confused", -2),
    ("lacking", -2),
    ("inadequate", -2),
    ("disappointing", -2),
    ("struggled", -2),
    ("nervous", -1),
    ("difficult", -1),
    ("struggle", -1),
    ("problem", -1),
    ("problems", -1),
    ("issue", -1),
    ("issues", -1),
    ("hard", -1),
    ("unfortunately", -1),
    ("never", -1),
];

/// Confidence words. Weights may be zero or negative: hedging language
/// pulls the score down, assertive language pushes it up.
pub const CONFIDENCE_WEIGHTS: &[(&str, i32)] = &[
    ("definitely", 2),
    ("absolutely", 2),
    ("certainly", 2),
    ("convinced", 2),
    ("confident", 2),
    ("assertive", 1),
    ("decisive", 1),
    ("determined", 1),
    ("clearly", 1),
    ("exactly", 1),
    ("precisely", 1),
    ("specifically", 1),
    ("sure", 1),
    ("positive", 1),
    ("generally", 0),
    ("overall", 0),
    ("maybe", -1),
    ("perhaps", -1),
    ("possibly", -1),
    ("might", -1),
    ("could", -1),
    ("probably", -1),
    ("suppose", -1),
    ("tentative", -1),
    ("vague", -1),
    ("unclear", -1),
    ("confused", -1),
    ("unsure", -2),
    ("uncertain", -2),
    ("doubt", -2),
    ("hesitant", -2),
];

/// Vocabulary that signals professional register in an interview answer.
pub const PROFESSIONAL_WORDS: &[&str] = &[
    "experience",
    "skills",
    "expertise",
    "knowledge",
    "proficient",
    "accomplished",
    "achieved",
    "successful",
    "leadership",
    "management",
    "innovative",
    "creative",
    "analytical",
    "strategic",
    "efficient",
    "collaborative",
    "communication",
    "results",
    "improvement",
    "optimization",
    "development",
    "implementation",
    "architecture",
    "stakeholders",
    "mentored",
    "delivered",
];

/// English stop words plus conversational interview filler.
/// Tokens of length <= 2 are dropped by the tokenizer before this set is
/// consulted, so two-letter entries would be unreachable and are omitted.
pub const STOP_WORDS: &[&str] = &[
    // Core English stop words
    "about", "above", "after", "again", "against", "all", "and", "any", "are",
    "because", "been", "before", "being", "below", "between", "both", "but",
    "can", "did", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "into", "its", "itself",
    "just", "more", "most", "myself", "nor", "not", "now", "off", "once",
    "only", "other", "our", "ours", "ourselves", "out", "over", "own",
    "same", "she", "should", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "too", "under", "until", "very", "was", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "you", "your", "yours", "yourself", "yourselves",
    // Contraction stems left behind once punctuation is stripped
    "don", "didn", "doesn", "isn", "aren", "wasn", "weren", "hasn", "haven",
    "won", "wouldn", "shouldn", "couldn",
    // Interview filler
    "actually", "alright", "basically", "guess", "kind", "know", "like",
    "literally", "mean", "obviously", "okay", "right", "sort", "think",
    "well",
];

/// Filler words and phrases detected in raw transcript text.
/// Multi-word phrases are matched with word boundaries, so short entries
/// like "um" are valid here even though the tokenizer would drop them.
pub const FILLER_PHRASES: &[&str] = &[
    "um",
    "uh",
    "er",
    "ah",
    "like",
    "you know",
    "so",
    "well",
    "actually",
    "basically",
    "literally",
    "obviously",
    "right",
    "okay",
    "alright",
    "i mean",
    "sort of",
    "kind of",
    "you see",
    "let me think",
];

/// Single words signalling assertive delivery.
pub const STRONG_CONFIDENCE_MARKERS: &[&str] = &[
    "definitely",
    "absolutely",
    "certainly",
    "clearly",
    "exactly",
    "precisely",
    "specifically",
    "undoubtedly",
    "obviously",
];

/// Single words signalling hedged delivery.
pub const WEAK_CONFIDENCE_MARKERS: &[&str] =
    &["maybe", "perhaps", "probably", "possibly"];

/// Discourse markers that structure an answer.
pub const CLEAR_MARKERS: &[&str] =
    &["first", "second", "third", "next", "then", "finally", "specifically"];

/// Vague placeholders that blur an answer.
pub const UNCLEAR_MARKERS: &[&str] = &[
    "stuff",
    "things",
    "whatever",
    "something",
    "somehow",
    "somewhere",
    "whatnot",
    "etcetera",
];

lazy_static! {
    static ref POSITIVE_TABLE: HashMap<&'static str, i32> =
        POSITIVE_WEIGHTS.iter().copied().collect();
    static ref NEGATIVE_TABLE: HashMap<&'static str, i32> =
        NEGATIVE_WEIGHTS.iter().copied().collect();
    static ref CONFIDENCE_TABLE: HashMap<&'static str, i32> =
        CONFIDENCE_WEIGHTS.iter().copied().collect();
    static ref STOP_WORD_SET: HashSet<&'static str> =
        STOP_WORDS.iter().copied().collect();
    static ref PROFESSIONAL_SET: HashSet<&'static str> =
        PROFESSIONAL_WORDS.iter().copied().collect();
}

pub fn positive_weight(token: &str) -> Option<i32> {
    POSITIVE_TABLE.get(token).copied()
}

pub fn negative_weight(token: &str) -> Option<i32> {
    NEGATIVE_TABLE.get(token).copied()
}

pub fn confidence_weight(token: &str) -> Option<i32> {
    CONFIDENCE_TABLE.get(token).copied()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}

pub fn is_professional(token: &str) -> bool {
    PROFESSIONAL_SET.contains(token)
}
