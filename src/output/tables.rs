use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::core::{PipelineError, Result};
use crate::pipelines::sentiment_analysis_pipeline::{MovieSummary, SentimentRecord};

pub const DETAILED_HEADER: [&str; 5] = [
    "Movie",
    "Review Number",
    "Review Text",
    "Sentiment",
    "Compound Score",
];

pub const SUMMARY_HEADER: [&str; 5] = [
    "Movie",
    "Total Reviews",
    "Positive (%)",
    "Negative (%)",
    "Neutral (%)",
];

pub(crate) fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| PipelineError::io(path, e))
}

/// Write one row per review, in report order.
pub fn write_detailed<W: Write>(writer: W, records: &[SentimentRecord]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(DETAILED_HEADER)?;

    for record in records {
        writer.write_record([
            record.movie.clone(),
            record.review_number.to_string(),
            record.review_text.clone(),
            record.sentiment.to_string(),
            record.compound_score.to_string(),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write one row per movie with percentages to two decimals.
pub fn write_summary<W: Write>(writer: W, summaries: &[MovieSummary]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(SUMMARY_HEADER)?;

    for summary in summaries {
        writer.write_record([
            summary.movie_title.clone(),
            summary.total_reviews.to_string(),
            format!("{:.2}", summary.positive_pct),
            format!("{:.2}", summary.negative_pct),
            format!("{:.2}", summary.neutral_pct),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn save_detailed(path: &Path, records: &[SentimentRecord]) -> Result<()> {
    write_detailed(create(path)?, records)?;
    tracing::info!("Saved detailed sentiment results to {}", path.display());
    Ok(())
}

pub fn save_summary(path: &Path, summaries: &[MovieSummary]) -> Result<()> {
    write_summary(create(path)?, summaries)?;
    tracing::info!("Saved sentiment summary table to {}", path.display());
    Ok(())
}
