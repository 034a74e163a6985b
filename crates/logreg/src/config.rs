use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Hyper-parameters of a `LogisticRegression` model.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// configuration file only needs to name what it changes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogisticConfig {
    /// Step size of each gradient-descent update.
    pub learning_rate: f64,
    /// Hard cap on the number of training iterations.
    pub max_iteration: usize,
    /// Default early-stopping window, in consecutive non-improving validation checks.
    pub patience: Option<usize>,
    /// Decision boundary on the predicted probability.
    pub threshold: f64,
}

impl LogisticConfig {
    pub fn new(
        learning_rate: f64,
        max_iteration: usize,
        patience: Option<usize>,
        threshold: f64,
    ) -> Self {
        Self {
            learning_rate,
            max_iteration,
            patience,
            threshold,
        }
    }

    /// Resolve the effective patience for one fit call.
    ///
    /// A per-call value always wins over the stored default. A window of zero
    /// counts as unset and disables early stopping.
    pub fn resolve_patience(&self, per_call: Option<usize>) -> Option<usize> {
        per_call.or(self.patience).filter(|&p| p > 0)
    }
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_iteration: 1000,
            patience: None,
            threshold: 0.5,
        }
    }
}

/// Per-call arguments of `LogisticRegression::fit`.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Overrides `LogisticConfig::patience` when set.
    pub patience: Option<usize>,
    /// Print progress lines to standard output.
    pub print_loss: bool,
    /// Render the loss chart to this HTML file once training ends.
    pub plot_path: Option<PathBuf>,
    /// Reporting cadence, in iterations.
    pub report_every: usize,
}

impl FitOptions {
    /// Options that neither print nor plot.
    pub fn quiet() -> Self {
        Self {
            print_loss: false,
            ..Self::default()
        }
    }

    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = Some(patience);
        self
    }

    pub fn with_plot<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.plot_path = Some(path.into());
        self
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            patience: None,
            print_loss: true,
            plot_path: None,
            report_every: 100,
        }
    }
}
