//! Review sentiment pipeline.
//!
//! Normalizes heterogeneous review sources (uploaded record files, fetched
//! web pages) into a uniform review stream, scores each review's polarity
//! against a static lexicon, classifies it as Positive/Neutral/Negative, and
//! aggregates the batch into a label distribution. Scored batches can be
//! exported as CSV for download.
//!
//! The crate is a library for a presentation layer to drive: it exposes no
//! network listener and no CLI of its own.
//!
//! ```no_run
//! use review_sentiment::{summarize, to_csv_bytes, RecordFileAdapter, ReviewAnalyzer};
//!
//! # fn main() -> review_sentiment::Result<()> {
//! let adapter = RecordFileAdapter::from_path("reviews.csv")?;
//! let batch = ReviewAnalyzer::new().analyze(&adapter)?;
//! let summary = summarize(&batch.scored);
//! let download = to_csv_bytes(&batch.scored)?;
//! # let _ = (summary, download);
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod analyzer;
mod error;
mod export;
mod lexicon;
mod model;
mod scorer;
mod source;

pub use aggregate::{summarize, LabelStat, SentimentSummary};
pub use analyzer::{Batch, ReviewAnalyzer};
pub use error::{PipelineError, Result};
pub use export::{read_csv, to_csv_bytes, write_csv, ExportRecord};
pub use model::{Review, ReviewSource, ScoredReview, SentimentLabel};
pub use scorer::{classify, SentimentScorer};
pub use source::{
    fetch_page, fetch_page_with_timeout, Extraction, RecordFileAdapter, SourceAdapter,
    WebExtractAdapter, FETCH_TIMEOUT,
    REVIEW_CONTAINER_CLASS, REVIEW_TEXT_CLASS, REVIEW_TEXT_COLUMN,
};
