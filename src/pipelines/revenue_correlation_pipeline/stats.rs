//! Small dense statistics helpers: Pearson correlation and least squares.

use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use crate::core::{PipelineError, Result};

/// Singular values below `s_max * RANK_TOLERANCE` are treated as zero.
const RANK_TOLERANCE: f64 = 1e-10;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson correlation. NaN when either side has zero variance or fewer
/// than two points.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return f64::NAN;
    }
    let (mx, my) = (mean(&xs[..n]), mean(&ys[..n]));
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn from_columns(columns: &[(&str, &[f64])]) -> Self {
        let labels = columns.iter().map(|(name, _)| name.to_string()).collect();
        let values = columns
            .iter()
            .map(|(_, a)| columns.iter().map(|(_, b)| pearson(a, b)).collect())
            .collect();
        Self { labels, values }
    }

    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let r = self.labels.iter().position(|l| l == row)?;
        let c = self.labels.iter().position(|l| l == col)?;
        Some(self.values[r][c])
    }
}

/// Result of an ordinary least squares fit with intercept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearFit {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(b, x)| b * x)
                .sum::<f64>()
    }
}

/// Least squares fit of `target` on `rows` (one feature vector per row).
///
/// Features and target are centered and the coefficients are the
/// minimum-norm solution from an SVD of the centered design, so collinear
/// features (percentages summing to 100) still produce a fit.
pub fn fit_least_squares(rows: &[Vec<f64>], target: &[f64]) -> Result<LinearFit> {
    let n = rows.len();
    if n < 2 || target.len() != n {
        return Err(PipelineError::InsufficientData {
            needed: 2,
            found: n.min(target.len()),
        });
    }
    let p = rows[0].len();

    let x = DMatrix::from_fn(n, p, |i, j| rows[i][j]);
    let y = DVector::from_column_slice(target);
    let x_mean = x.row_mean();
    let y_mean = y.mean();

    let centered_x = DMatrix::from_fn(n, p, |i, j| x[(i, j)] - x_mean[j]);
    let centered_y = y.add_scalar(-y_mean);

    let svd = centered_x.svd(true, true);
    let cutoff = svd.singular_values.max() * RANK_TOLERANCE;
    let beta = svd
        .solve(&centered_y, cutoff)
        .map_err(|e| PipelineError::Regression(e.to_string()))?;

    let intercept = y_mean - x_mean.transpose().dot(&beta);

    Ok(LinearFit {
        coefficients: beta.iter().copied().collect(),
        intercept,
    })
}

pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    let squared: Vec<f64> = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .collect();
    mean(&squared)
}

/// Coefficient of determination. A constant target scores 1.0 when
/// predicted exactly and 0.0 otherwise.
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> f64 {
    let m = mean(actual);
    let ss_tot: f64 = actual.iter().map(|a| (a - m).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_pearson_perfect_and_degenerate() {
        assert!(close(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 1.0, 1e-12));
        assert!(close(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0, 1e-12));
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(pearson(&[1.0], &[1.0]).is_nan());
    }

    #[test]
    fn test_exact_linear_recovery() {
        let x1 = [0.0, 1.0, 2.0, 3.0, 4.0];
        let x2 = [1.0, 0.0, 1.0, 0.0, 2.0];
        let rows: Vec<Vec<f64>> = x1.iter().zip(&x2).map(|(a, b)| vec![*a, *b]).collect();
        let y: Vec<f64> = x1.iter().zip(&x2).map(|(a, b)| 2.0 * a - b + 5.0).collect();

        let fit = fit_least_squares(&rows, &y).unwrap();
        assert!(close(fit.coefficients[0], 2.0, 1e-9));
        assert!(close(fit.coefficients[1], -1.0, 1e-9));
        assert!(close(fit.intercept, 5.0, 1e-9));
    }

    #[test]
    fn test_collinear_features_still_fit() {
        // Third column is 100 minus the other two.
        let rows = vec![
            vec![50.0, 30.0, 20.0],
            vec![70.0, 10.0, 20.0],
            vec![20.0, 60.0, 20.0],
            vec![40.0, 40.0, 20.0],
            vec![60.0, 15.0, 25.0],
        ];
        let y: Vec<f64> = rows.iter().map(|r| 3.0 * r[0] + 1.0 * r[1] + 10.0).collect();

        let fit = fit_least_squares(&rows, &y).unwrap();
        let predicted: Vec<f64> = rows.iter().map(|r| fit.predict(r)).collect();
        assert!(close(r2_score(&y, &predicted), 1.0, 1e-9));
        assert!(mean_squared_error(&y, &predicted) < 1e-9);
    }

    #[test]
    fn test_box_office_scale_takes_minimum_norm_solution() {
        let shares = [
            (70.0, 10.0),
            (55.0, 25.0),
            (40.0, 20.0),
            (85.0, 5.0),
            (30.0, 50.0),
            (60.0, 15.0),
            (45.0, 35.0),
        ];
        let rows: Vec<Vec<f64>> = shares
            .iter()
            .map(|&(pos, neg)| vec![pos, neg, 100.0 - pos - neg])
            .collect();
        let revenue: Vec<f64> = shares
            .iter()
            .map(|&(pos, neg)| 2e7 * pos - 1e7 * neg + 1e8)
            .collect();

        let fit = fit_least_squares(&rows, &revenue).unwrap();

        // Any multiple of (1, 1, 1) can be added; the smallest solution has zero sum.
        let expected = [5e7 / 3.0, -4e7 / 3.0, -1e7 / 3.0];
        for (got, want) in fit.coefficients.iter().zip(expected) {
            assert!(close(*got, want, want.abs() * 1e-6), "{got} vs {want}");
        }
        let predicted: Vec<f64> = rows.iter().map(|r| fit.predict(r)).collect();
        assert!(close(r2_score(&revenue, &predicted), 1.0, 1e-9));
    }

    #[test]
    fn test_constant_features_give_mean_prediction() {
        let rows = vec![vec![1.0], vec![1.0], vec![1.0]];
        let fit = fit_least_squares(&rows, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(fit.coefficients, vec![0.0]);
        assert!(close(fit.intercept, 2.0, 1e-12));
    }

    #[test]
    fn test_too_few_rows() {
        let err = fit_least_squares(&[vec![1.0]], &[1.0]).unwrap_err();
        assert!(matches!(err, PipelineError::InsufficientData { needed: 2, found: 1 }));
    }
}
