use serde::Serialize;

/// Loss values sampled at the reporting cadence of a fit call.
///
/// `validation` is `Some` only when the fit was monitored on a validation
/// set; it then has one entry per entry of `train`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LossHistory {
    pub iterations: Vec<usize>,
    pub train: Vec<f64>,
    pub validation: Option<Vec<f64>>,
}

impl LossHistory {
    pub fn new(with_validation: bool) -> Self {
        Self {
            iterations: Vec::new(),
            train: Vec::new(),
            validation: if with_validation { Some(Vec::new()) } else { None },
        }
    }

    pub fn record(&mut self, iteration: usize, train_loss: f64, val_loss: Option<f64>) {
        self.iterations.push(iteration);
        self.train.push(train_loss);
        if let (Some(trace), Some(loss)) = (self.validation.as_mut(), val_loss) {
            trace.push(loss);
        }
    }

    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    pub fn has_validation(&self) -> bool {
        self.validation.is_some()
    }

    /// Training loss recorded at `iteration`, if that iteration was sampled.
    pub fn train_loss_at(&self, iteration: usize) -> Option<f64> {
        self.iterations
            .iter()
            .position(|&i| i == iteration)
            .map(|idx| self.train[idx])
    }

    /// Validation loss recorded at `iteration`, if any.
    pub fn val_loss_at(&self, iteration: usize) -> Option<f64> {
        let trace = self.validation.as_ref()?;
        self.iterations
            .iter()
            .position(|&i| i == iteration)
            .and_then(|idx| trace.get(idx).copied())
    }
}
