//! Analyze a CSV of reviews (or a live page) and print the distribution.
//!
//! Usage:
//!   cargo run --example analyze_reviews -- reviews.csv
//!   cargo run --example analyze_reviews -- https://example.com/product

use review_sentiment::{
    fetch_page, summarize, RecordFileAdapter, ReviewAnalyzer, WebExtractAdapter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let input = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: analyze_reviews <reviews.csv | url>"))?;

    let analyzer = ReviewAnalyzer::new();
    let batch = if input.starts_with("http://") || input.starts_with("https://") {
        let html = fetch_page(&input).await?;
        analyzer.analyze(&WebExtractAdapter::parse(&html))?
    } else {
        analyzer.analyze(&RecordFileAdapter::from_path(&input)?)?
    };

    if batch.is_empty() {
        println!("No reviews found.");
        return Ok(());
    }

    for review in &batch.scored {
        println!("{:8} {:+.2}  {}", review.label.to_string(), review.score, review.text);
    }

    let summary = summarize(&batch.scored);
    println!("\n{} reviews ({} rejected)", summary.total, batch.rejected);
    for stat in &summary.stats {
        println!("  {:8} {:3}  {:5.1}%", stat.label.to_string(), stat.count, stat.percent);
    }

    Ok(())
}
