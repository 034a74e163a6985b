use ndarray::{Array1, Array2};

use crate::error::Result;

/// A small trait abstraction for binary classifiers, so callers can hold a
/// model as `Box<dyn ClassifierModel>` without knowing its training knobs.
pub trait ClassifierModel {
    /// Fit the model. `y` holds 0/1 labels. The eval set is only used when
    /// both halves are provided.
    fn fit(
        &mut self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        x_eval: Option<&Array2<f64>>,
        y_eval: Option<&Array1<f64>>,
    ) -> Result<()>;

    /// Predict 0/1 class labels.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<u8>>;

    /// Predict probabilities (0..1) of the positive class.
    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
