//! Batch orchestration: source → scorer → classifier.

use crate::error::Result;
use crate::model::ScoredReview;
use crate::scorer::{classify, SentimentScorer};
use crate::source::SourceAdapter;
use tracing::{info, warn};

/// One analyzed batch: scored reviews in source order plus the count of
/// reviews the adapter rejected during extraction.
#[derive(Debug, Default)]
pub struct Batch {
    pub scored: Vec<ScoredReview>,
    pub rejected: usize,
}

impl Batch {
    /// True when the source yielded no usable reviews ("no reviews found").
    pub fn is_empty(&self) -> bool {
        self.scored.is_empty()
    }
}

/// Runs the scoring pipeline over one source.
#[derive(Debug, Default)]
pub struct ReviewAnalyzer {
    scorer: SentimentScorer,
}

impl ReviewAnalyzer {
    pub fn new() -> Self {
        ReviewAnalyzer {
            scorer: SentimentScorer::new(),
        }
    }

    /// Score and classify every review the adapter emits, preserving source
    /// order. Adapter failures propagate unchanged; no partial batch is ever
    /// produced from a fatal source error.
    pub fn analyze(&self, source: &dyn SourceAdapter) -> Result<Batch> {
        let extraction = source.extract()?;

        let scored = extraction
            .reviews
            .into_iter()
            .map(|review| {
                let score = self.scorer.score(&review.text);
                ScoredReview {
                    text: review.text,
                    score,
                    label: classify(score),
                }
            })
            .collect::<Vec<_>>();

        if scored.is_empty() {
            warn!(rejected = extraction.rejected, "no reviews found in source");
        } else {
            info!(
                reviews = scored.len(),
                rejected = extraction.rejected,
                "batch analyzed"
            );
        }

        Ok(Batch {
            scored,
            rejected: extraction.rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::model::SentimentLabel;
    use crate::source::{Extraction, RecordFileAdapter};

    struct FailingSource;

    impl SourceAdapter for FailingSource {
        fn extract(&self) -> Result<Extraction> {
            Err(PipelineError::SourceFormat("boom".into()))
        }
    }

    #[test]
    fn analyze_scores_every_review_in_order() {
        let csv = "review_text\nGreat product!\n\"Terrible, broke immediately\"\nIt's okay\n";
        let adapter = RecordFileAdapter::new(csv.as_bytes());
        let batch = ReviewAnalyzer::new().analyze(&adapter).unwrap();

        assert_eq!(batch.scored.len(), 3);
        assert_eq!(batch.rejected, 0);
        assert_eq!(batch.scored[0].label, SentimentLabel::Positive);
        assert_eq!(batch.scored[1].label, SentimentLabel::Negative);
        assert_eq!(batch.scored[2].label, SentimentLabel::Neutral);
        assert_eq!(batch.scored[0].text, "Great product!");
        assert_eq!(batch.scored[2].text, "It's okay");
    }

    #[test]
    fn label_always_matches_score_sign() {
        let csv = "review_text\nAmazing quality\nWorst purchase ever\nArrived on Tuesday\n";
        let adapter = RecordFileAdapter::new(csv.as_bytes());
        let batch = ReviewAnalyzer::new().analyze(&adapter).unwrap();
        for review in &batch.scored {
            assert_eq!(review.label, classify(review.score));
        }
    }

    #[test]
    fn fatal_source_error_propagates_without_partial_batch() {
        let err = ReviewAnalyzer::new().analyze(&FailingSource).unwrap_err();
        assert!(matches!(err, PipelineError::SourceFormat(_)));
    }

    #[test]
    fn empty_source_yields_empty_batch() {
        let adapter = RecordFileAdapter::new("review_text\n".as_bytes());
        let batch = ReviewAnalyzer::new().analyze(&adapter).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.rejected, 0);
    }
}
