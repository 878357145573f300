//! Pipeline error types.

use thiserror::Error;

/// Errors that can abort a batch.
///
/// "No reviews found" is deliberately not a variant: an empty extraction is a
/// valid (if disappointing) result, surfaced as an empty batch plus a warning
/// log, never as an `Err`.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input source does not have the shape the adapter requires.
    /// The message names the missing piece so it can be shown to the user.
    #[error("source format error: {0}")]
    SourceFormat(String),

    /// Fetching the web source failed: connection error, timeout, or a
    /// non-success HTTP status. Fatal for the whole invocation.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// CSV serialization or deserialization failed.
    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    pub(crate) fn missing_column(column: &str) -> Self {
        PipelineError::SourceFormat(format!("missing required column '{column}'"))
    }

    pub(crate) fn fetch(url: &str, source: reqwest::Error) -> Self {
        PipelineError::Fetch {
            url: url.to_string(),
            source,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
