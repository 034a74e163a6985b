use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::config::{FitOptions, LogisticConfig};
use crate::error::{ensure_dim, LogRegError, Result};
use crate::math::{binary_cross_entropy, gradients, linear_scores, sigmoid_array};
use crate::models::classifier_trait::ClassifierModel;
use crate::report::{
    ConsoleReporter, IterationReport, LossHistory, MultiReporter, PlotReporter, TrainingReporter,
};

/// Learned state: one weight per feature plus the intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub weights: Array1<f64>,
    pub bias: f64,
}

impl Parameters {
    fn zeros(num_features: usize) -> Self {
        Self {
            weights: Array1::zeros(num_features),
            bias: 0.0,
        }
    }

    fn probabilities(&self, x: ArrayView2<f64>) -> Array1<f64> {
        sigmoid_array(&linear_scores(x, self.weights.view(), self.bias))
    }
}

/// Where and why a fit call stopped before `max_iteration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarlyStop {
    /// 0-based index of the stopping iteration. No update ran on it.
    pub iteration: usize,
    pub best_val_loss: f64,
}

/// Outcome of one fit call.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSummary {
    /// Number of loop iterations executed, the stopping one included.
    pub iterations: usize,
    pub early_stop: Option<EarlyStop>,
    pub history: LossHistory,
}

/// Binary logistic regression trained with batch gradient descent.
///
/// A model is built from its configuration only; weights and bias appear on
/// the first `fit` and are reset to zero at the start of every later one.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    config: LogisticConfig,
    params: Option<Parameters>,
}

/// Tracks the best validation loss and the run of checks that failed to beat it.
#[derive(Debug)]
struct EarlyStopping {
    patience: Option<usize>,
    best_loss: f64,
    no_improvement: usize,
}

impl EarlyStopping {
    fn new(patience: Option<usize>) -> Self {
        Self {
            patience,
            best_loss: f64::INFINITY,
            no_improvement: 0,
        }
    }

    /// Record one validation loss; returns true once training should stop.
    fn update(&mut self, val_loss: f64) -> bool {
        if val_loss < self.best_loss {
            self.best_loss = val_loss;
            self.no_improvement = 0;
        } else {
            self.no_improvement += 1;
        }
        matches!(self.patience, Some(p) if self.no_improvement >= p)
    }
}

impl LogisticRegression {
    pub fn new(config: LogisticConfig) -> Self {
        LogisticRegression {
            config,
            params: None,
        }
    }

    pub fn config(&self) -> &LogisticConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    pub fn parameters(&self) -> Option<&Parameters> {
        self.params.as_ref()
    }

    pub fn weights(&self) -> Option<&Array1<f64>> {
        self.params.as_ref().map(|p| &p.weights)
    }

    pub fn bias(&self) -> Option<f64> {
        self.params.as_ref().map(|p| p.bias)
    }

    /// Fit the model, printing and plotting according to `options`.
    ///
    /// Validation monitoring only happens when both `x_val` and `y_val` are
    /// given; supplying one of them alone trains without it.
    pub fn fit(
        &mut self,
        x_train: &Array2<f64>,
        y_train: &Array1<f64>,
        x_val: Option<&Array2<f64>>,
        y_val: Option<&Array1<f64>>,
        options: &FitOptions,
    ) -> Result<FitSummary> {
        let mut reporter = MultiReporter::new();
        if options.print_loss {
            reporter.push(ConsoleReporter);
        }
        if let Some(path) = &options.plot_path {
            reporter.push(PlotReporter::new(path.clone()));
        }

        let validation = match (x_val, y_val) {
            (Some(x), Some(y)) => Some((x.view(), y.view())),
            _ => None,
        };

        self.fit_with_reporter(
            x_train.view(),
            y_train.view(),
            validation,
            options.patience,
            options.report_every,
            &mut reporter,
        )
    }

    /// Core training loop.
    ///
    /// `patience` overrides the configured default when set. Every
    /// `report_every` iterations (0 disables sampling) the losses are
    /// recorded in the returned history and forwarded to `reporter`.
    /// Errors from `TrainingReporter::finish` are logged, not returned.
    pub fn fit_with_reporter(
        &mut self,
        x_train: ArrayView2<f64>,
        y_train: ArrayView1<f64>,
        validation: Option<(ArrayView2<f64>, ArrayView1<f64>)>,
        patience: Option<usize>,
        report_every: usize,
        reporter: &mut dyn TrainingReporter,
    ) -> Result<FitSummary> {
        let (num_samples, num_features) = x_train.dim();
        ensure_dim("training labels", num_samples, y_train.len())?;
        if let Some((x_val, y_val)) = validation {
            ensure_dim("validation features", num_features, x_val.ncols())?;
            ensure_dim("validation labels", x_val.nrows(), y_val.len())?;
        }

        let patience = self.config.resolve_patience(patience);
        let learning_rate = self.config.learning_rate;
        log::debug!(
            "Fitting logistic regression: samples={}, features={}, validation={}, patience={:?}",
            num_samples,
            num_features,
            validation.is_some(),
            patience
        );

        let mut params = Parameters::zeros(num_features);
        let mut history = LossHistory::new(validation.is_some());
        let mut stopping = EarlyStopping::new(patience);
        let mut early_stop = None;
        let mut iterations = 0;

        for i in 0..self.config.max_iteration {
            iterations = i + 1;

            let y_pred = params.probabilities(x_train);
            let loss = binary_cross_entropy(y_train, y_pred.view());

            let val_loss = validation.map(|(x_val, y_val)| {
                let y_pred_val = params.probabilities(x_val);
                binary_cross_entropy(y_val, y_pred_val.view())
            });

            if report_every > 0 && i % report_every == 0 {
                log::trace!("iteration {}: loss={} val_loss={:?}", i, loss, val_loss);
                history.record(i, loss, val_loss);
                reporter.on_iteration(&IterationReport {
                    iteration: i,
                    train_loss: loss,
                    val_loss,
                });
            }

            if let Some(val_loss) = val_loss {
                if stopping.update(val_loss) {
                    log::info!(
                        "Early stopping at iteration {}: no validation improvement \
                         for {} checks (best {:.6})",
                        i + 1,
                        stopping.no_improvement,
                        stopping.best_loss
                    );
                    reporter.on_early_stop(i, stopping.best_loss);
                    early_stop = Some(EarlyStop {
                        iteration: i,
                        best_val_loss: stopping.best_loss,
                    });
                    break;
                }
            }

            let grad = gradients(x_train, y_train, y_pred.view());
            params.weights.scaled_add(-learning_rate, &grad.dw);
            params.bias -= learning_rate * grad.db;
        }

        self.params = Some(params);
        log::debug!("Fit finished after {} iterations", iterations);

        // Reporting runs after the parameters are final; a failed plot does not fail the fit.
        if let Err(err) = reporter.finish(&history) {
            log::warn!("Loss report could not be written: {}", err);
        }

        Ok(FitSummary {
            iterations,
            early_stop,
            history,
        })
    }

    /// Probability of the positive class for each row of `x`.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let params = self.params.as_ref().ok_or(LogRegError::NotFitted)?;
        ensure_dim("test features", params.weights.len(), x.ncols())?;
        Ok(params.probabilities(x.view()))
    }

    /// Class labels: 1 when the probability is strictly above the threshold.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<u8>> {
        let threshold = self.config.threshold;
        let proba = self.predict_proba(x)?;
        Ok(proba.mapv(|p| u8::from(p > threshold)))
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(LogisticConfig::default())
    }
}

impl ClassifierModel for LogisticRegression {
    fn fit(
        &mut self,
        x: &Array2<f64>,
        y: &Array1<f64>,
        x_eval: Option<&Array2<f64>>,
        y_eval: Option<&Array1<f64>>,
    ) -> Result<()> {
        LogisticRegression::fit(self, x, y, x_eval, y_eval, &FitOptions::quiet()).map(|_| ())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<u8>> {
        LogisticRegression::predict(self, x)
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        LogisticRegression::predict_proba(self, x)
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
