use std::path::PathBuf;
use thiserror::Error;

/// Error type returned by every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file does not exist. Raised before any read is attempted.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("{path}: missing column {column}")]
    MissingColumn { path: String, column: String },

    /// A ratings list could not be decoded.
    #[error("malformed ratings: {0}")]
    Ratings(String),

    #[error("regression failed: {0}")]
    Regression(String),

    #[error("not enough data points: need {needed}, found {found}")]
    InsufficientData { needed: usize, found: usize },
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
