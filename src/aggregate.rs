//! Label distribution over a scored batch.

use crate::model::{ScoredReview, SentimentLabel};
use serde::Serialize;

/// Count and share for one label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelStat {
    pub label: SentimentLabel,
    pub count: usize,
    /// Share of the batch in percent. 0.0 for an empty batch.
    pub percent: f64,
}

/// Distribution of labels across one batch, in the fixed order Positive,
/// Neutral, Negative. Always rebuilt from the batch, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub stats: [LabelStat; 3],
}

impl SentimentSummary {
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.stat(label).count
    }

    pub fn percent(&self, label: SentimentLabel) -> f64 {
        self.stat(label).percent
    }

    fn stat(&self, label: SentimentLabel) -> &LabelStat {
        // stats is built in SentimentLabel::ALL order.
        let index = match label {
            SentimentLabel::Positive => 0,
            SentimentLabel::Neutral => 1,
            SentimentLabel::Negative => 2,
        };
        &self.stats[index]
    }
}

/// Reduce a scored batch into per-label counts and percentages.
///
/// An empty batch produces all-zero counts and percentages rather than a
/// division fault.
pub fn summarize(scored: &[ScoredReview]) -> SentimentSummary {
    let total = scored.len();
    let stats = SentimentLabel::ALL.map(|label| {
        let count = scored.iter().filter(|r| r.label == label).count();
        let percent = if total == 0 {
            0.0
        } else {
            100.0 * count as f64 / total as f64
        };
        LabelStat {
            label,
            count,
            percent,
        }
    });
    SentimentSummary { total, stats }
}
