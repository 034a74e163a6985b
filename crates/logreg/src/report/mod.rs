//! Loss traces and the reporters that consume them.
//!
//! The training loop records a `LossHistory` on its own and forwards the same
//! samples to a `TrainingReporter`. Console output and plotting are reporter
//! implementations; neither influences the learned parameters.
pub mod history;
pub mod plots;
pub mod reporter;

pub use history::LossHistory;
pub use plots::{plot_losses, PlotReporter};
pub use reporter::{ConsoleReporter, IterationReport, MultiReporter, NoopReporter, TrainingReporter};
