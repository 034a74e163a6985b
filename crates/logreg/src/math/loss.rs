use ndarray::{Array1, ArrayView1, ArrayView2};

/// Gradient of the mean log-loss with respect to the model parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub dw: Array1<f64>,
    pub db: f64,
}

/// Linear score `Z = X . w + b`, one value per row of `x`.
pub fn linear_scores(x: ArrayView2<f64>, weights: ArrayView1<f64>, bias: f64) -> Array1<f64> {
    x.dot(&weights) + bias
}

/// Mean binary cross-entropy of predicted probabilities against 0/1 labels.
///
/// Probabilities of exactly 0 or 1 give non-finite terms; they are not
/// clipped and propagate into the mean. An empty input yields NaN.
pub fn binary_cross_entropy(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> f64 {
    let total: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&y, &p)| -(y * p.ln() + (1.0 - y) * (1.0 - p).ln()))
        .sum();
    total / y_true.len() as f64
}

/// Gradients of `binary_cross_entropy(y_true, sigmoid(X . w + b))`:
///
/// * `dw = X^T (y_pred - y_true) / N`
/// * `db = sum(y_pred - y_true) / N`
pub fn gradients(
    x: ArrayView2<f64>,
    y_true: ArrayView1<f64>,
    y_pred: ArrayView1<f64>,
) -> Gradients {
    let n = x.nrows() as f64;
    let residual = &y_pred - &y_true;
    let dw = x.t().dot(&residual) / n;
    let db = residual.sum() / n;
    Gradients { dw, db }
}
