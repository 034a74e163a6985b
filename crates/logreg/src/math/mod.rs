//! Numeric kernels of the classifier.
//!
//! `activation` holds the logistic function; `loss` holds the linear score,
//! the mean binary cross-entropy and its gradients. Shapes are checked by the
//! model before these are called, so the kernels themselves assume
//! consistent inputs.
pub mod activation;
pub mod loss;

pub use activation::{sigmoid, sigmoid_array};
pub use loss::{binary_cross_entropy, gradients, linear_scores, Gradients};
