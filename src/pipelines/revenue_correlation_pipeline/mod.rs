//! Correlation and linear regression between review sentiment and revenue.
//!
//! A movie financial table is left-joined to the per-movie sentiment
//! summaries by title. Rows with both a revenue figure and a summary feed a
//! Pearson correlation matrix and, given enough of them, a least squares
//! fit of revenue on the three sentiment percentages.
//!
//! ```rust,no_run
//! use review_sentiment::core::RegressionOptions;
//! use review_sentiment::datasets::load_financials;
//! use review_sentiment::pipelines::revenue_correlation_pipeline::*;
//! # use review_sentiment::pipelines::sentiment_analysis_pipeline::MovieSummary;
//!
//! # fn run(summaries: &[MovieSummary]) -> anyhow::Result<()> {
//! let financials = load_financials("merged_movie_data.csv")?;
//! let report = RevenueCorrelationPipeline::new(RegressionOptions::default())
//!     .run(&financials, summaries)?;
//! if let Some(regression) = &report.regression {
//!     println!("R²: {:.3}", regression.r2);
//! }
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod stats;

pub use pipeline::{
    CombinedRow, CorrelationReport, RegressionReport, RevenueCorrelationPipeline,
    MIN_REGRESSION_ROWS, REVENUE_LABEL, SENTIMENT_LABELS,
};
pub use stats::{CorrelationMatrix, LinearFit};
