//! Core data types flowing through the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a review came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSource {
    /// One row of an uploaded record file.
    FileRow,
    /// One matched element of a fetched web page.
    WebExtract,
}

/// A single raw review as emitted by a source adapter.
///
/// `index` is the source-local position (row number or document order) and is
/// what keeps ordering stable and row-level warnings addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub text: String,
    pub source: ReviewSource,
    pub index: usize,
}

/// Three-way sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Fixed enumeration order used for summaries, legends, and exports.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One review after scoring and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    pub text: String,
    /// Polarity in [-1.0, 1.0].
    pub score: f64,
    pub label: SentimentLabel,
}
