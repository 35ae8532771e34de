use std::io::Write;
use std::path::Path;

use csv::Writer;

use super::tables::create;
use crate::core::Result;
use crate::pipelines::revenue_correlation_pipeline::{
    CombinedRow, CorrelationMatrix, REVENUE_LABEL, SENTIMENT_LABELS,
};

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => v.to_string(),
        _ => String::new(),
    }
}

/// Square matrix with a leading label column. NaN cells are left empty.
pub fn write_matrix<W: Write>(writer: W, matrix: &CorrelationMatrix) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    let header: Vec<&str> = std::iter::once("")
        .chain(matrix.labels.iter().map(String::as_str))
        .collect();
    writer.write_record(&header)?;

    for (label, row) in matrix.labels.iter().zip(&matrix.values) {
        let record: Vec<String> = std::iter::once(label.clone())
            .chain(row.iter().map(|v| cell(Some(*v))))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_combined<W: Write>(writer: W, rows: &[CombinedRow]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record([
        "Title",
        REVENUE_LABEL,
        "Total Reviews",
        SENTIMENT_LABELS[0],
        SENTIMENT_LABELS[1],
        SENTIMENT_LABELS[2],
    ])?;

    for row in rows {
        let s = row.sentiment.as_ref();
        writer.write_record([
            row.title.clone(),
            cell(row.revenue),
            s.map(|s| s.total_reviews.to_string()).unwrap_or_default(),
            cell(s.map(|s| s.positive_pct)),
            cell(s.map(|s| s.negative_pct)),
            cell(s.map(|s| s.neutral_pct)),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn save_matrix(path: &Path, matrix: &CorrelationMatrix) -> Result<()> {
    write_matrix(create(path)?, matrix)?;
    tracing::info!("Saved correlation matrix to {}", path.display());
    Ok(())
}

pub fn save_combined(path: &Path, rows: &[CombinedRow]) -> Result<()> {
    write_combined(create(path)?, rows)?;
    tracing::info!("Saved combined movie and sentiment data to {}", path.display());
    Ok(())
}
