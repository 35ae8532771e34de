use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use super::stats::{self, CorrelationMatrix, LinearFit};
use crate::core::{PipelineError, RegressionOptions, Result};
use crate::datasets::MovieFinancials;
use crate::pipelines::sentiment_analysis_pipeline::MovieSummary;

pub const REVENUE_LABEL: &str = "Final_Revenue";
pub const SENTIMENT_LABELS: [&str; 3] = ["Positive (%)", "Negative (%)", "Neutral (%)"];

/// Fewest joined rows for which a regression is attempted.
pub const MIN_REGRESSION_ROWS: usize = 4;

/// A financial row left-joined with its sentiment summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedRow {
    pub title: String,
    pub revenue: Option<f64>,
    pub sentiment: Option<MovieSummary>,
}

impl CombinedRow {
    /// Revenue and the three percentages, when both sides are present.
    pub fn observation(&self) -> Option<(f64, [f64; 3])> {
        let revenue = self.revenue?;
        let s = self.sentiment.as_ref()?;
        Some((revenue, [s.positive_pct, s.negative_pct, s.neutral_pct]))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionReport {
    pub fit: LinearFit,
    pub train_rows: usize,
    /// Rows MSE and R² were computed on; equals `train_rows` without holdout.
    pub eval_rows: usize,
    pub mse: f64,
    pub r2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationReport {
    pub combined: Vec<CombinedRow>,
    pub observations: usize,
    pub matrix: CorrelationMatrix,
    /// `None` with fewer than [`MIN_REGRESSION_ROWS`] observations.
    pub regression: Option<RegressionReport>,
}

/// Relates per-movie sentiment percentages to box-office revenue.
pub struct RevenueCorrelationPipeline {
    options: RegressionOptions,
}

impl RevenueCorrelationPipeline {
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Left-joins `financials` to `summaries` by exact title.
    pub fn combine(financials: &[MovieFinancials], summaries: &[MovieSummary]) -> Vec<CombinedRow> {
        let by_title: HashMap<&str, &MovieSummary> = summaries
            .iter()
            .map(|s| (s.movie_title.as_str(), s))
            .collect();
        financials
            .iter()
            .map(|f| CombinedRow {
                title: f.title.clone(),
                revenue: f.revenue,
                sentiment: by_title.get(f.title.as_str()).map(|s| (*s).clone()),
            })
            .collect()
    }

    /// Joins `financials` to `summaries` and correlates the result.
    pub fn run(
        &self,
        financials: &[MovieFinancials],
        summaries: &[MovieSummary],
    ) -> Result<CorrelationReport> {
        self.correlate(&Self::combine(financials, summaries))
    }

    /// Correlation matrix and (with enough rows) regression over already
    /// joined rows. Fails with `InsufficientData` below two observations;
    /// the caller keeps `combined` either way.
    pub fn correlate(&self, combined: &[CombinedRow]) -> Result<CorrelationReport> {
        let observations: Vec<(f64, [f64; 3])> =
            combined.iter().filter_map(CombinedRow::observation).collect();

        let dropped = combined.len() - observations.len();
        if dropped > 0 {
            tracing::info!("Dropped {dropped} row(s) missing revenue or sentiment");
        }
        if observations.len() < 2 {
            return Err(PipelineError::InsufficientData {
                needed: 2,
                found: observations.len(),
            });
        }

        let revenue: Vec<f64> = observations.iter().map(|(r, _)| *r).collect();
        let columns: Vec<Vec<f64>> = (0..3)
            .map(|j| observations.iter().map(|(_, s)| s[j]).collect())
            .collect();
        let matrix = CorrelationMatrix::from_columns(&[
            (REVENUE_LABEL, revenue.as_slice()),
            (SENTIMENT_LABELS[0], columns[0].as_slice()),
            (SENTIMENT_LABELS[1], columns[1].as_slice()),
            (SENTIMENT_LABELS[2], columns[2].as_slice()),
        ]);

        let regression = if observations.len() >= MIN_REGRESSION_ROWS {
            Some(self.regress(&observations)?)
        } else {
            tracing::info!(
                "Only {} observation(s); skipping regression (needs {MIN_REGRESSION_ROWS})",
                observations.len()
            );
            None
        };

        Ok(CorrelationReport {
            observations: observations.len(),
            combined: combined.to_vec(),
            matrix,
            regression,
        })
    }

    fn regress(&self, observations: &[(f64, [f64; 3])]) -> Result<RegressionReport> {
        let (train, eval) = self.split(observations.len());

        let rows = |idx: &[usize]| -> Vec<Vec<f64>> {
            idx.iter().map(|&i| observations[i].1.to_vec()).collect()
        };
        let targets = |idx: &[usize]| -> Vec<f64> { idx.iter().map(|&i| observations[i].0).collect() };

        let fit = stats::fit_least_squares(&rows(&train), &targets(&train))?;
        let eval_y = targets(&eval);
        let predicted: Vec<f64> = rows(&eval).iter().map(|r| fit.predict(r)).collect();

        let report = RegressionReport {
            train_rows: train.len(),
            eval_rows: eval.len(),
            mse: stats::mean_squared_error(&eval_y, &predicted),
            r2: stats::r2_score(&eval_y, &predicted),
            fit,
        };
        tracing::info!(
            coefficients = ?report.fit.coefficients,
            intercept = report.fit.intercept,
            "Linear regression: MSE {:.4e}, R² {:.4}",
            report.mse,
            report.r2
        );
        Ok(report)
    }

    /// Train and evaluation row indices. Without a usable holdout both are
    /// every row.
    fn split(&self, n: usize) -> (Vec<usize>, Vec<usize>) {
        let all: Vec<usize> = (0..n).collect();
        let Some(fraction) = self.options.holdout_fraction else {
            return (all.clone(), all);
        };

        let test = ((n as f64) * fraction).ceil() as usize;
        if test == 0 || n - test.min(n) < 2 {
            tracing::warn!("Holdout of {fraction} leaves too few training rows; evaluating on all {n}");
            return (all.clone(), all);
        }

        let mut shuffled = all;
        shuffled.shuffle(&mut StdRng::seed_from_u64(self.options.seed));
        let train = shuffled.split_off(test);
        (train, shuffled)
    }
}
