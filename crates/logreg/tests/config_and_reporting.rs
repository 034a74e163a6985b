//! Integration tests for configuration loading and loss reporting.

use std::fs;

use logreg::report::{
    plot_losses, ConsoleReporter, IterationReport, LossHistory, PlotReporter, TrainingReporter,
};
use logreg::{FitOptions, LogisticConfig, LogisticRegression};
use ndarray::array;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn partial_config_fills_defaults() {
    let config: LogisticConfig =
        serde_json::from_str(r#"{ "learning_rate": 0.1, "patience": 20 }"#).unwrap();
    assert_eq!(config.learning_rate, 0.1);
    assert_eq!(config.patience, Some(20));
    assert_eq!(config.max_iteration, 1000);
    assert_eq!(config.threshold, 0.5);
}

#[test]
fn config_serializes_every_field() {
    let config = LogisticConfig::new(0.05, 200, None, 0.7);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["learning_rate"], 0.05);
    assert_eq!(json["max_iteration"], 200);
    assert!(json["patience"].is_null());
    assert_eq!(json["threshold"], 0.7);

    let back: LogisticConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn fit_options_default_to_printing_without_plot() {
    let options = FitOptions::default();
    assert!(options.print_loss);
    assert!(options.plot_path.is_none());
    assert_eq!(options.patience, None);
    assert_eq!(options.report_every, 100);
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

#[test]
fn console_line_includes_validation_loss() {
    let line = ConsoleReporter::format_iteration(&IterationReport {
        iteration: 100,
        train_loss: 0.25,
        val_loss: Some(0.3),
    });
    assert_eq!(line, "Loss after iteration 100: 0.250000 (validation: 0.300000)");
}

#[test]
fn fit_renders_loss_plot_when_path_given() {
    let x = array![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let y = array![0.0, 0.0, 0.0, 1.0];
    let path = std::env::temp_dir().join(format!("logreg-fit-plot-{}.html", std::process::id()));

    let mut model = LogisticRegression::new(LogisticConfig::new(0.1, 300, None, 0.5));
    let options = FitOptions::quiet().with_plot(&path);
    let summary = model.fit(&x, &y, Some(&x), Some(&y), &options).unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("Training and Validation Loss"));
    assert_eq!(summary.history.len(), 3);
    fs::remove_file(&path).unwrap();
}

#[test]
fn plot_of_train_only_history_has_train_title() {
    let x = array![[0.0], [1.0]];
    let y = array![0.0, 1.0];
    let mut model = LogisticRegression::new(LogisticConfig::new(0.1, 150, None, 0.5));
    let summary = model.fit(&x, &y, None, None, &FitOptions::quiet()).unwrap();

    let json = plot_losses(&summary.history).to_json();
    assert!(json.contains("Training Loss"));
    assert!(!json.contains("Validation"));
}

#[test]
fn unwritable_plot_path_keeps_fit_successful() {
    let x = array![[0.0], [1.0]];
    let y = array![0.0, 1.0];
    let path = std::env::temp_dir()
        .join("logreg-missing-plot-dir")
        .join("nested")
        .join("loss.html");

    let mut model = LogisticRegression::new(LogisticConfig::new(0.1, 50, None, 0.5));
    let summary = model
        .fit(&x, &y, None, None, &FitOptions::quiet().with_plot(&path))
        .unwrap();

    assert_eq!(summary.iterations, 50);
    assert_eq!(summary.history.len(), 1);
    assert!(model.is_fitted());
    assert!(!path.exists());
}

#[test]
fn plot_reporter_remembers_its_path() {
    let path = std::env::temp_dir().join(format!("logreg-path-{}.html", std::process::id()));
    let mut reporter = PlotReporter::new(&path);
    assert_eq!(reporter.path(), path.as_path());

    let mut history = LossHistory::new(false);
    history.record(0, 0.69, None);
    reporter.finish(&history).unwrap();
    assert!(reporter.path().exists());
    fs::remove_file(reporter.path()).unwrap();
}

#[test]
fn loss_history_serializes_to_json() {
    let mut history = LossHistory::new(true);
    history.record(0, 0.5, Some(0.75));
    history.record(100, 0.25, Some(0.5));

    let json = serde_json::to_value(&history).unwrap();
    assert_eq!(json["iterations"], serde_json::json!([0, 100]));
    assert_eq!(json["train"], serde_json::json!([0.5, 0.25]));
    assert_eq!(json["validation"], serde_json::json!([0.75, 0.5]));

    let train_only = serde_json::to_value(&LossHistory::new(false)).unwrap();
    assert!(train_only["validation"].is_null());
}
