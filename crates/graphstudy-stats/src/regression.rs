//! Simple linear regression.
//!
//! Fits a straight line through unordered `(x, y)` data points using ordinary least
//! squares with unit weights. The scaling-law fits of entropy against the binary
//! logarithm of the bin count are the main consumer.

use serde::{Deserialize, Serialize};

/// Intercept and slope of a fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// The value of the line at `x = 0`.
    pub intercept: f64,
    /// The incline of the line.
    pub slope: f64,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fits a line through the given data points.
///
/// If there are no data points, both intercept and slope are NaN. If all points share
/// the same `x` value (including the case of a single point), the slope is zero and
/// the intercept is the arithmetic mean of the `y` values.
///
/// The result does not depend on the order of the points beyond floating-point
/// rounding.
///
/// # Examples
///
/// ```
/// use graphstudy_stats::regression::fit_line;
///
/// let fit = fit_line(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
/// assert!((fit.intercept - 1.0).abs() < 1e-12);
/// assert!((fit.slope - 2.0).abs() < 1e-12);
///
/// let empty = fit_line(&[]);
/// assert!(empty.intercept.is_nan() && empty.slope.is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn fit_line(points: &[(f64, f64)]) -> LinearFit {
    if points.is_empty() {
        return LinearFit {
            intercept: f64::NAN,
            slope: f64::NAN,
        };
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    // Centered sums keep the fit stable for data far away from the origin
    let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
        let dx = x - mean_x;
        (sxx + dx * dx, sxy + dx * (y - mean_y))
    });

    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    LinearFit {
        intercept: mean_y - slope * mean_x,
        slope,
    }
}
