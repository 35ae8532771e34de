use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use super::tables::create;
use crate::core::{PipelineError, Result};
use crate::pipelines::sentiment_analysis_pipeline::{MovieSummary, SentimentReport};

/// Renders the plain-text summary, one `=== <Movie> ===` block per movie.
pub fn render_summary(summaries: &[MovieSummary]) -> String {
    let mut out = String::new();
    for s in summaries {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\n=== {} ===\nTotal Reviews: {}\nPositive: {:.2}%\nNegative: {:.2}%\nNeutral: {:.2}%\n",
            s.movie_title, s.total_reviews, s.positive_pct, s.negative_pct, s.neutral_pct
        );
    }
    out
}

/// Renders an aligned console table of the summaries.
pub fn render_table(summaries: &[MovieSummary]) -> String {
    let width = summaries
        .iter()
        .map(|s| s.movie_title.chars().count())
        .chain(std::iter::once("Movie".len()))
        .max()
        .unwrap_or(5);

    let mut out = format!(
        "{:<width$}  {:>13}  {:>12}  {:>12}  {:>11}\n",
        "Movie", "Total Reviews", "Positive (%)", "Negative (%)", "Neutral (%)"
    );
    for s in summaries {
        let _ = writeln!(
            out,
            "{:<width$}  {:>13}  {:>12.2}  {:>12.2}  {:>11.2}",
            s.movie_title, s.total_reviews, s.positive_pct, s.negative_pct, s.neutral_pct
        );
    }
    out
}

pub fn save_summary(path: &Path, summaries: &[MovieSummary]) -> Result<()> {
    let mut file = create(path)?;
    file.write_all(render_summary(summaries).as_bytes())
        .map_err(|e| PipelineError::io(path, e))?;
    tracing::info!("Saved text sentiment summary to {}", path.display());
    Ok(())
}

pub fn save_json_report(path: &Path, report: &SentimentReport) -> Result<()> {
    let file = create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    tracing::info!("Saved JSON sentiment report to {}", path.display());
    Ok(())
}
