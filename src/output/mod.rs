//! Flat-file outputs of a sentiment run.

pub mod correlation;
pub mod tables;
pub mod text;

use std::path::PathBuf;

use crate::core::{PipelineConfig, PipelineError, Result};
use crate::pipelines::revenue_correlation_pipeline::{CombinedRow, CorrelationReport};
use crate::pipelines::sentiment_analysis_pipeline::SentimentReport;

pub use text::{render_summary, render_table};

/// Writes the detailed table, the summary table, the text summary and
/// (unless disabled) the JSON report into `config.output_dir`, creating it
/// if needed. Returns the paths written.
pub fn save_sentiment_outputs(
    config: &PipelineConfig,
    report: &SentimentReport,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| PipelineError::io(&config.output_dir, e))?;

    let detailed = config.detailed_csv_path();
    tables::save_detailed(&detailed, &report.records)?;

    let summary = config.summary_csv_path();
    tables::save_summary(&summary, &report.summaries)?;

    let summary_txt = config.summary_txt_path();
    text::save_summary(&summary_txt, &report.summaries)?;

    let mut written = vec![detailed, summary, summary_txt];
    if config.write_json {
        let json = config.report_json_path();
        text::save_json_report(&json, report)?;
        written.push(json);
    }
    Ok(written)
}

/// Writes the combined financial/sentiment table on its own, for runs where
/// too few rows joined to correlate.
pub fn save_combined_table(config: &PipelineConfig, rows: &[CombinedRow]) -> Result<PathBuf> {
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| PipelineError::io(&config.output_dir, e))?;

    let combined = config.combined_csv_path();
    correlation::save_combined(&combined, rows)?;
    Ok(combined)
}

/// Writes the combined financial/sentiment table and the correlation matrix.
pub fn save_correlation_outputs(
    config: &PipelineConfig,
    report: &CorrelationReport,
) -> Result<Vec<PathBuf>> {
    let combined = save_combined_table(config, &report.combined)?;

    let matrix = config.correlation_csv_path();
    correlation::save_matrix(&matrix, &report.matrix)?;

    Ok(vec![combined, matrix])
}
