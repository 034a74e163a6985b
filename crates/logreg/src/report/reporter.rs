use crate::error::Result;
use crate::report::history::LossHistory;

/// One sampled training iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    pub iteration: usize,
    pub train_loss: f64,
    pub val_loss: Option<f64>,
}

/// Sink for training progress events.
///
/// `on_iteration` is only called at the reporting cadence. `finish` runs once
/// after the loop, whether it ran to completion or stopped early.
pub trait TrainingReporter {
    fn on_iteration(&mut self, report: &IterationReport);

    fn on_early_stop(&mut self, _iteration: usize, _best_val_loss: f64) {}

    fn finish(&mut self, _history: &LossHistory) -> Result<()> {
        Ok(())
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl TrainingReporter for NoopReporter {
    fn on_iteration(&mut self, _report: &IterationReport) {}
}

/// Prints progress lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn format_iteration(report: &IterationReport) -> String {
        match report.val_loss {
            Some(val) => format!(
                "Loss after iteration {}: {:.6} (validation: {:.6})",
                report.iteration, report.train_loss, val
            ),
            None => format!("Loss after iteration {}: {:.6}", report.iteration, report.train_loss),
        }
    }

    /// `iteration` is the 0-based index; the message counts from one.
    pub fn format_early_stop(iteration: usize) -> String {
        format!(
            "Stopped early at iteration {} due to no improvement in validation loss.",
            iteration + 1
        )
    }
}

impl TrainingReporter for ConsoleReporter {
    fn on_iteration(&mut self, report: &IterationReport) {
        println!("{}", Self::format_iteration(report));
    }

    fn on_early_stop(&mut self, iteration: usize, _best_val_loss: f64) {
        println!("{}", Self::format_early_stop(iteration));
    }
}

/// Fans events out to several reporters, in insertion order.
#[derive(Default)]
pub struct MultiReporter {
    reporters: Vec<Box<dyn TrainingReporter>>,
}

impl MultiReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<R: TrainingReporter + 'static>(&mut self, reporter: R) {
        self.reporters.push(Box::new(reporter));
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl TrainingReporter for MultiReporter {
    fn on_iteration(&mut self, report: &IterationReport) {
        for reporter in self.reporters.iter_mut() {
            reporter.on_iteration(report);
        }
    }

    fn on_early_stop(&mut self, iteration: usize, best_val_loss: f64) {
        for reporter in self.reporters.iter_mut() {
            reporter.on_early_stop(iteration, best_val_loss);
        }
    }

    fn finish(&mut self, history: &LossHistory) -> Result<()> {
        for reporter in self.reporters.iter_mut() {
            reporter.finish(history)?;
        }
        Ok(())
    }
}
