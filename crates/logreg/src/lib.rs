//! logreg: binary logistic regression trained by batch gradient descent.
//!
//! This crate provides a single linear classifier (`LogisticRegression`) with
//! optional early stopping on a validation set, the numeric building blocks it
//! is made of (sigmoid, log-loss and its gradients), and small reporting
//! helpers for printing and plotting loss traces.
//!
//! Reporting is kept behind the `TrainingReporter` trait so the numeric core
//! can be exercised without a console or a plotting backend.
pub mod config;
pub mod error;
pub mod math;
pub mod models;
pub mod report;

pub use config::{FitOptions, LogisticConfig};
pub use error::{LogRegError, Result};
pub use models::logistic_regression::{EarlyStop, FitSummary, LogisticRegression};
