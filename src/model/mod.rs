//! Linear model types and the ridge solver

pub mod ridge;

pub use ridge::Ridge;

use ndarray::{Array1, Array2, ArrayView1};

/// A fitted linear model: one weight per feature plus an intercept.
///
/// Weights are always in original-feature-scale units and follow the
/// order of the feature names the model was fitted with. Immutable once
/// produced by the solver.
#[derive(Debug, Clone)]
pub struct FittedModel {
    /// Feature names in weight order
    pub feature_names: Vec<String>,
    /// One weight per feature
    pub weights: Array1<f64>,
    /// Scalar intercept
    pub intercept: f64,
}

impl FittedModel {
    /// Predict a single observation
    pub fn predict_one(&self, x: ArrayView1<f64>) -> f64 {
        self.weights.dot(&x) + self.intercept
    }

    /// Predict every row of a matrix
    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        x.dot(&self.weights) + self.intercept
    }
}
