//! Closed-form ridge regression
//!
//! Minimizes `||y - Xw - b||^2 + alpha * ||w||^2` by solving the
//! regularized normal equations on centered data. The intercept is never
//! penalized. With alpha > 0 the system is symmetric positive-definite
//! even when a feature column is constant, so the solve is always
//! defined; that is the point of the penalty here.

use crate::model::FittedModel;
use crate::{HoopsError, Result};
use ndarray::{Array1, Array2, Axis};

/// Ridge regression solver
#[derive(Debug, Clone, Copy)]
pub struct Ridge {
    /// Regularization strength (alpha >= 0)
    pub alpha: f64,
    /// Standardize feature columns before solving; weights are mapped
    /// back so the fitted model is in original-feature-scale units
    pub normalize: bool,
}

impl Ridge {
    pub fn new(alpha: f64) -> Self {
        Ridge {
            alpha,
            normalize: false,
        }
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Fit the model to the given design matrix and targets
    pub fn fit(
        &self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        feature_names: &[String],
    ) -> Result<FittedModel> {
        let (n, p) = x.dim();
        if n == 0 {
            return Err(HoopsError::InsufficientData(
                "training partition is empty".to_string(),
            ));
        }
        if y.len() != n {
            return Err(HoopsError::Schema(format!(
                "feature matrix has {} rows but target has {} values",
                n,
                y.len()
            )));
        }
        if feature_names.len() != p {
            return Err(HoopsError::Schema(format!(
                "{} feature names for {} columns",
                feature_names.len(),
                p
            )));
        }

        let x_mean = x
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(p));
        let y_mean = y.mean().unwrap_or(0.0);

        let mut xc = x - &x_mean;
        let yc = y - y_mean;

        // Column scales; a constant column keeps scale 1.0 so the solve
        // stays defined (the penalty pins its weight at zero anyway).
        let scales = if self.normalize {
            let scales: Array1<f64> = xc
                .axis_iter(Axis(1))
                .map(|col| {
                    let var = col.mapv(|v| v * v).sum() / n as f64;
                    let std = var.sqrt();
                    if std > 0.0 {
                        std
                    } else {
                        1.0
                    }
                })
                .collect();
            for (j, &s) in scales.iter().enumerate() {
                xc.column_mut(j).mapv_inplace(|v| v / s);
            }
            Some(scales)
        } else {
            None
        };

        let mut gram = xc.t().dot(&xc);
        for j in 0..p {
            gram[(j, j)] += self.alpha;
        }
        let rhs = xc.t().dot(&yc);

        let mut weights = cholesky_solve(gram, rhs)?;

        if let Some(scales) = scales {
            weights.zip_mut_with(&scales, |w, &s| *w /= s);
        }

        let intercept = y_mean - weights.dot(&x_mean);

        log::debug!(
            "Fitted ridge (alpha={}, normalize={}): {} weights, intercept={:.6}",
            self.alpha,
            self.normalize,
            p,
            intercept
        );

        Ok(FittedModel {
            feature_names: feature_names.to_vec(),
            weights,
            intercept,
        })
    }
}

/// Solve `A z = b` for symmetric positive-definite `A` by Cholesky
/// factorization. The system here is (p x p) with p = feature count, so
/// a dense in-place factorization is plenty.
fn cholesky_solve(mut a: Array2<f64>, b: Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();

    for j in 0..n {
        let mut diag = a[(j, j)];
        for k in 0..j {
            diag -= a[(j, k)] * a[(j, k)];
        }
        if diag <= 0.0 {
            return Err(HoopsError::InsufficientData(
                "design matrix is rank-deficient; fit with alpha > 0".to_string(),
            ));
        }
        let pivot = diag.sqrt();
        a[(j, j)] = pivot;
        for i in (j + 1)..n {
            let mut sum = a[(i, j)];
            for k in 0..j {
                sum -= a[(i, k)] * a[(j, k)];
            }
            a[(i, j)] = sum / pivot;
        }
    }

    // Forward substitution: L z = b
    let mut z = b;
    for i in 0..n {
        for k in 0..i {
            let t = z[k];
            z[i] -= a[(i, k)] * t;
        }
        z[i] /= a[(i, i)];
    }

    // Back substitution: L^T w = z
    for i in (0..n).rev() {
        for k in (i + 1)..n {
            let t = z[k];
            z[i] -= a[(k, i)] * t;
        }
        z[i] /= a[(i, i)];
    }

    Ok(z)
}
