use std::fs;
use std::path::{Path, PathBuf};

use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

use crate::error::Result;
use crate::report::history::LossHistory;
use crate::report::reporter::{IterationReport, TrainingReporter};

/// Plot the training loss (and validation loss, when recorded) against the
/// sampled iteration index.
pub fn plot_losses(history: &LossHistory) -> Plot {
    let iterations: Vec<f64> = history.iterations.iter().map(|&i| i as f64).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(iterations.clone(), history.train.clone())
            .name("Training Loss")
            .mode(Mode::Lines),
    );

    let title = match &history.validation {
        Some(val) => {
            plot.add_trace(
                Scatter::new(iterations, val.clone())
                    .name("Validation Loss")
                    .mode(Mode::Lines),
            );
            "Training and Validation Loss"
        }
        None => "Training Loss",
    };

    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title("Iteration"))
            .y_axis(Axis::new().title("Loss")),
    );

    plot
}

/// Renders the loss chart to a standalone HTML file when training ends.
#[derive(Debug, Clone)]
pub struct PlotReporter {
    path: PathBuf,
}

impl PlotReporter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrainingReporter for PlotReporter {
    fn on_iteration(&mut self, _report: &IterationReport) {}

    fn finish(&mut self, history: &LossHistory) -> Result<()> {
        let plot = plot_losses(history);
        fs::write(&self.path, plot.to_html())?;
        log::debug!("Loss plot written to: {}", self.path.display());
        Ok(())
    }
}
