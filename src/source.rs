//! Source adapters: turn raw inputs into an ordered review stream.

use crate::error::{PipelineError, Result};
use crate::model::{Review, ReviewSource};
use scraper::{Html, Selector};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Required text column in uploaded record files. Fixed contract.
pub const REVIEW_TEXT_COLUMN: &str = "review_text";

/// Fixed container/text element classes the web extractor looks for.
pub const REVIEW_CONTAINER_CLASS: &str = "feedback-item";
pub const REVIEW_TEXT_CLASS: &str = "feedback-text";

/// Deadline for the whole fetch, connect through body read.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// The ordered review stream from one source, plus the count of entries
/// whose text could not be extracted. Rejects are tracked, never silently
/// dropped.
#[derive(Debug, Default)]
pub struct Extraction {
    pub reviews: Vec<Review>,
    pub rejected: usize,
}

/// A strategy for turning one input source into a review stream.
///
/// Implementations never mutate their input and must emit reviews in source
/// order. A fatal shape problem (missing column, bad selector) is an `Err`;
/// zero extracted reviews is a valid empty `Extraction`.
pub trait SourceAdapter {
    fn extract(&self) -> Result<Extraction>;
}

// ============================================================================
// Record file adapter (CSV upload)
// ============================================================================

/// Adapter over the raw bytes of an uploaded delimited record file.
pub struct RecordFileAdapter {
    data: Vec<u8>,
}

impl RecordFileAdapter {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        RecordFileAdapter { data: data.into() }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(RecordFileAdapter {
            data: std::fs::read(path)?,
        })
    }
}

impl SourceAdapter for RecordFileAdapter {
    fn extract(&self) -> Result<Extraction> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(self.data.as_slice());

        let headers = reader
            .headers()
            .map_err(|e| PipelineError::SourceFormat(format!("unreadable header row: {e}")))?;
        let column = headers
            .iter()
            .position(|h| h == REVIEW_TEXT_COLUMN)
            .ok_or_else(|| PipelineError::missing_column(REVIEW_TEXT_COLUMN))?;

        let mut extraction = Extraction::default();
        for (index, record) in reader.records().enumerate() {
            match record {
                Ok(row) => match row.get(column) {
                    Some(text) => extraction.reviews.push(Review {
                        text: text.to_string(),
                        source: ReviewSource::FileRow,
                        index,
                    }),
                    None => {
                        warn!(row = index, "row has no review text cell, skipping");
                        extraction.rejected += 1;
                    }
                },
                Err(e) => {
                    warn!(row = index, error = %e, "unreadable row, skipping");
                    extraction.rejected += 1;
                }
            }
        }
        Ok(extraction)
    }
}

// ============================================================================
// Web extract adapter (fetched page)
// ============================================================================

/// Adapter over a parsed HTML document.
///
/// Best-effort extractor for one specific page shape: review text lives in a
/// text element nested inside a container element, matched by class. Not a
/// general scraper; alternative selectors go through [`with_classes`].
///
/// [`with_classes`]: WebExtractAdapter::with_classes
#[derive(Debug)]
pub struct WebExtractAdapter {
    document: Html,
    container: Selector,
    text: Selector,
}

impl WebExtractAdapter {
    /// Parse `html` and look for the default container/text classes.
    pub fn parse(html: &str) -> Self {
        WebExtractAdapter {
            document: Html::parse_document(html),
            container: Selector::parse(&format!("div.{REVIEW_CONTAINER_CLASS}")).unwrap(),
            text: Selector::parse(&format!("div.{REVIEW_TEXT_CLASS}")).unwrap(),
        }
    }

    /// Parse `html` with alternative container/text classes, the seam for
    /// pages with a different review markup.
    pub fn with_classes(html: &str, container_class: &str, text_class: &str) -> Result<Self> {
        let container = Selector::parse(&format!("div.{container_class}")).map_err(|e| {
            PipelineError::SourceFormat(format!("invalid container class '{container_class}': {e}"))
        })?;
        let text = Selector::parse(&format!("div.{text_class}")).map_err(|e| {
            PipelineError::SourceFormat(format!("invalid text class '{text_class}': {e}"))
        })?;
        Ok(WebExtractAdapter {
            document: Html::parse_document(html),
            container,
            text,
        })
    }
}

impl SourceAdapter for WebExtractAdapter {
    fn extract(&self) -> Result<Extraction> {
        let mut extraction = Extraction::default();
        for (index, element) in self.document.select(&self.container).enumerate() {
            match element.select(&self.text).next() {
                Some(node) => {
                    let text = node.text().collect::<String>().trim().to_string();
                    extraction.reviews.push(Review {
                        text,
                        source: ReviewSource::WebExtract,
                        index,
                    });
                }
                None => {
                    warn!(element = index, "review container has no text element, skipping");
                    extraction.rejected += 1;
                }
            }
        }
        Ok(extraction)
    }
}

/// Fetch a page body with a browser-like user-agent and a bounded deadline.
///
/// Any network error, timeout, or non-2xx status is a single fatal
/// [`PipelineError::Fetch`] for the whole batch. No automatic retries; the
/// caller decides whether to try again.
pub async fn fetch_page(url: &str) -> Result<String> {
    fetch_page_with_timeout(url, FETCH_TIMEOUT).await
}

/// [`fetch_page`] with an explicit deadline, the seam for callers that
/// cannot wait out the default.
pub async fn fetch_page_with_timeout(url: &str, deadline: Duration) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .timeout(deadline)
        .build()
        .map_err(|e| PipelineError::fetch(url, e))?;

    let response = client
        .get(url)
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| PipelineError::fetch(url, e))?
        .error_for_status()
        .map_err(|e| PipelineError::fetch(url, e))?;

    let body = response
        .text()
        .await
        .map_err(|e| PipelineError::fetch(url, e))?;
    debug!(url, bytes = body.len(), "fetched page");
    Ok(body)
}
