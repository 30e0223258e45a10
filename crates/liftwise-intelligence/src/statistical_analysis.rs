// ABOUTME: Least-squares linear regression and summary statistics for E1RM trend analysis
// ABOUTME: Fits value-over-time series and reports slope, intercept, R-squared, and correlation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Linear regression fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (change in y per unit x)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Pearson correlation coefficient (-1 to 1)
    pub correlation: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
    /// Degrees of freedom (n - 2)
    pub degrees_of_freedom: usize,
}

/// Regression and descriptive statistics over small series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit `y = slope * x + intercept` to `(x, y)` points by least squares
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points or every point shares the same x
    pub fn linear_regression(points: &[(f64, f64)]) -> AppResult<RegressionResult> {
        if points.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                points.len()
            )));
        }

        let n = points.len() as f64;

        let sum_x = points.iter().map(|(x, _)| x).sum::<f64>();
        let sum_y = points.iter().map(|(_, y)| y).sum::<f64>();
        let sum_xx = points.iter().map(|(x, _)| x * x).sum::<f64>();
        let sum_x_y = points.iter().map(|(x, y)| x * y).sum::<f64>();
        let sum_yy = points.iter().map(|(_, y)| y * y).sum::<f64>();

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
        if denominator.abs() < f64::EPSILON {
            return Err(AppError::invalid_input(
                "Cannot calculate regression: zero variance in x",
            ));
        }

        let slope = (n * mean_x).mul_add(-mean_y, sum_x_y) / denominator;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let numerator = (n * mean_x).mul_add(-mean_y, sum_x_y);
        let denominator_corr = (denominator * (n * mean_y).mul_add(-mean_y, sum_yy)).sqrt();
        let correlation = if denominator_corr > 0.0 {
            numerator / denominator_corr
        } else {
            0.0
        };

        let sse = points
            .iter()
            .map(|(x, y)| {
                let diff = y - slope.mul_add(*x, intercept);
                diff * diff
            })
            .sum::<f64>();

        let degrees_of_freedom = points.len().saturating_sub(2);
        let standard_error = if degrees_of_freedom > 0 {
            (sse / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared: correlation * correlation,
            correlation,
            standard_error,
            degrees_of_freedom,
        })
    }

    /// Arithmetic mean, 0 for an empty slice
    #[must_use]
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Percent change from `first` to `last`, 0 when `first` is not positive
    #[must_use]
    pub fn percent_change(first: f64, last: f64) -> f64 {
        if first <= 0.0 {
            return 0.0;
        }
        (last - first) / first * 100.0
    }
}
