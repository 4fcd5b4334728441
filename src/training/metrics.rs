//! Held-out evaluation metrics

use ndarray::ArrayView1;
use std::fmt;

/// Regression diagnostics on the held-out partition.
///
/// Diagnostics only: nothing feeds back into the model, and a poor fit
/// never fails the run.
#[derive(Debug, Clone, Copy)]
pub struct RegressionMetrics {
    /// Mean squared error
    pub mse: f64,
    /// Mean absolute error
    pub mae: f64,
    /// Coefficient of determination; NaN when the true targets have
    /// zero variance
    pub r2: f64,
}

impl RegressionMetrics {
    /// Compute metrics from true and predicted targets
    pub fn compute(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Self {
        let n = y_true.len();
        if n == 0 {
            return RegressionMetrics {
                mse: f64::NAN,
                mae: f64::NAN,
                r2: f64::NAN,
            };
        }

        let mut sq_sum = 0.0;
        let mut abs_sum = 0.0;
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            let residual = t - p;
            sq_sum += residual * residual;
            abs_sum += residual.abs();
        }
        let mse = sq_sum / n as f64;
        let mae = abs_sum / n as f64;

        let mean = y_true.sum() / n as f64;
        let ss_tot: f64 = y_true.iter().map(|&t| (t - mean) * (t - mean)).sum();
        let r2 = if ss_tot == 0.0 {
            f64::NAN
        } else {
            1.0 - sq_sum / ss_tot
        };

        RegressionMetrics { mse, mae, r2 }
    }
}

impl fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mse: {:.4} | mae: {:.4} | r2: {:.4}",
            self.mse, self.mae, self.r2
        )
    }
}
