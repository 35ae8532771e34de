use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use serde::Serialize;

use crate::core::{PipelineError, Result};

/// Revenue columns in order of preference.
pub const REVENUE_COLUMNS: [&str; 4] = [
    "Final_Revenue",
    "BoxOfficeMojo_WorldwideGross",
    "worldwide_gross",
    "TMDb_Revenue",
];

const TITLE_COLUMNS: [&str; 2] = ["Title", "title"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieFinancials {
    pub title: String,
    /// `None` when the cell is empty or not a number.
    pub revenue: Option<f64>,
}

/// Load a movie financial table from a CSV file.
pub fn load_financials(path: impl AsRef<Path>) -> Result<Vec<MovieFinancials>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PipelineError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;
    let rows = read_financials(file, &path.display().to_string())?;
    tracing::info!("Loaded {} financial row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read a financial table. `source` names the input in error messages.
pub fn read_financials<R: Read>(reader: R, source: &str) -> Result<Vec<MovieFinancials>> {
    let mut reader = Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let find = |candidates: &[&str]| {
        candidates
            .iter()
            .find_map(|name| headers.iter().position(|h| h.trim() == *name))
    };
    let title_idx = find(&TITLE_COLUMNS[..]).ok_or_else(|| PipelineError::MissingColumn {
        path: source.to_string(),
        column: "Title".to_string(),
    })?;
    let revenue_idx = find(&REVENUE_COLUMNS[..]).ok_or_else(|| PipelineError::MissingColumn {
        path: source.to_string(),
        column: REVENUE_COLUMNS.join(" | "),
    })?;
    tracing::debug!(revenue_column = &headers[revenue_idx], "using revenue column");

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let Some(title) = record.get(title_idx).map(str::trim).filter(|t| !t.is_empty()) else {
            continue;
        };
        rows.push(MovieFinancials {
            title: title.to_string(),
            revenue: record.get(revenue_idx).and_then(parse_amount),
        });
    }
    Ok(rows)
}

/// Parses `1445638102`, `1.4e9` or `$1,445,638,102`.
fn parse_amount(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
