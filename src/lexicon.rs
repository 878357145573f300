//! Static weighted sentiment lexicon.
//!
//! Word weights are compiled once into lookup tables. The tables are the
//! whole "model": scoring is a deterministic function of these weights, so
//! the same text always produces the same score.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Signed word weights in [-1.0, 1.0]. Positive weight = favorable.
pub static WORD_WEIGHTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for (word, weight) in [
        // Favorable
        ("good", 0.5),
        ("great", 0.8),
        ("excellent", 0.9),
        ("amazing", 0.9),
        ("wonderful", 0.85),
        ("fantastic", 0.9),
        ("superb", 0.85),
        ("outstanding", 0.85),
        ("brilliant", 0.8),
        ("love", 0.8),
        ("loved", 0.8),
        ("loving", 0.7),
        ("best", 0.8),
        ("better", 0.4),
        ("happy", 0.6),
        ("beautiful", 0.7),
        ("perfect", 0.9),
        ("awesome", 0.85),
        ("incredible", 0.8),
        ("delightful", 0.75),
        ("pleasant", 0.5),
        ("satisfying", 0.6),
        ("satisfied", 0.6),
        ("recommend", 0.6),
        ("recommended", 0.6),
        ("impressive", 0.7),
        ("exceptional", 0.8),
        ("remarkable", 0.7),
        ("helpful", 0.5),
        ("reliable", 0.5),
        ("quality", 0.4),
        ("valuable", 0.5),
        ("fast", 0.4),
        ("works", 0.3),
        ("worth", 0.5),
        ("durable", 0.5),
        ("comfortable", 0.5),
        ("easy", 0.4),
        ("nice", 0.5),
        ("solid", 0.4),
        // Unfavorable
        ("bad", -0.6),
        ("terrible", -0.9),
        ("awful", -0.9),
        ("horrible", -0.9),
        ("poor", -0.6),
        ("worst", -0.9),
        ("worse", -0.5),
        ("hate", -0.8),
        ("hated", -0.8),
        ("dislike", -0.6),
        ("disappointing", -0.7),
        ("disappointed", -0.7),
        ("failure", -0.7),
        ("failed", -0.7),
        ("fail", -0.6),
        ("sad", -0.5),
        ("unhappy", -0.6),
        ("angry", -0.7),
        ("annoyed", -0.5),
        ("frustrated", -0.6),
        ("frustrating", -0.6),
        ("problem", -0.4),
        ("problems", -0.4),
        ("issue", -0.3),
        ("issues", -0.3),
        ("defective", -0.8),
        ("broken", -0.8),
        ("broke", -0.8),
        ("crash", -0.7),
        ("crashed", -0.7),
        ("error", -0.4),
        ("errors", -0.4),
        ("wrong", -0.5),
        ("useless", -0.8),
        ("waste", -0.7),
        ("scam", -0.9),
        ("fraud", -0.9),
        ("fake", -0.7),
        ("unreliable", -0.6),
        ("slow", -0.4),
        ("difficult", -0.4),
        ("confusing", -0.4),
        ("expensive", -0.3),
        ("overpriced", -0.6),
        ("worthless", -0.8),
        ("garbage", -0.8),
        ("trash", -0.8),
        ("pathetic", -0.8),
        ("mediocre", -0.4),
        ("cheap", -0.3),
        ("flimsy", -0.6),
        ("refund", -0.5),
    ] {
        m.insert(word, weight);
    }
    m
});

/// Multipliers applied to the next sentiment word.
pub static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3),
        ("really", 1.3),
        ("extremely", 1.5),
        ("absolutely", 1.4),
        ("totally", 1.3),
        ("incredibly", 1.4),
        ("so", 1.2),
        ("quite", 1.1),
        ("somewhat", 0.7),
        ("slightly", 0.5),
    ]
    .into_iter()
    .collect()
});

/// Negation markers that flip the next sentiment word.
///
/// Contractions lose their apostrophe under the tokenizer, so the stems are
/// listed ("don't" tokenizes to "don", "t").
pub static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "cannot", "don", "doesn", "didn", "isn", "wasn", "aren", "weren",
        "won", "wouldn", "couldn", "shouldn",
    ]
    .into_iter()
    .collect()
});
