//! League statistics — pure functions that compute column summaries,
//! correlation, and regression.
//!
//! Every function is slices/league in, scalar or small struct out. No
//! dependencies on the UI or the data pipeline.

use serde::{Deserialize, Serialize};

use courtlab_core::{League, StatColumn};

/// Summary statistics for a single column over the whole league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: StatColumn,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl ColumnSummary {
    /// Compute a summary over every team in the league.
    pub fn compute(league: &League, column: StatColumn) -> Self {
        let values: Vec<f64> = league.teams().iter().map(|t| column.value(t)).collect();
        Self {
            column,
            mean: mean(&values),
            std_dev: std_dev(&values),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            count: values.len(),
        }
    }
}

/// Least-squares line through a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r: f64,
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Correlation between two columns over the whole league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub x: StatColumn,
    pub y: StatColumn,
    pub n: usize,
    pub r: f64,
    pub fit: Option<LinearFit>,
}

/// Pair two columns over the league and compute correlation + regression.
pub fn correlation(league: &League, x: StatColumn, y: StatColumn) -> CorrelationReport {
    let xs: Vec<f64> = league.teams().iter().map(|t| x.value(t)).collect();
    let ys: Vec<f64> = league.teams().iter().map(|t| y.value(t)).collect();
    CorrelationReport {
        x,
        y,
        n: xs.len(),
        r: pearson_r(&xs, &ys),
        fit: linear_fit(&xs, &ys),
    }
}

/// Arithmetic mean. 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1). 0.0 for fewer than 2 values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Pearson correlation coefficient.
///
/// Returns 0.0 for fewer than 2 points, mismatched lengths, or when either
/// side has zero variance.
pub fn pearson_r(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }
    let mx = mean(xs);
    let my = mean(ys);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x < 1e-15 || var_y < 1e-15 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Least-squares linear fit of `ys` on `xs`.
///
/// `None` for fewer than 2 points, mismatched lengths, or zero x-variance
/// (a vertical column of points has no meaningful slope).
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mx = mean(xs);
    let my = mean(ys);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        cov += (x - mx) * (y - my);
        var_x += (x - mx) * (x - mx);
    }
    if var_x < 1e-15 {
        return None;
    }

    let slope = cov / var_x;
    let intercept = my - slope * mx;
    let r = pearson_r(xs, ys);
    Some(LinearFit {
        slope,
        intercept,
        r,
        r_squared: r * r,
    })
}
