use anyhow::Result;
use logreg::{FitOptions, LogisticConfig, LogisticRegression};
use ndarray::array;

fn main() -> Result<()> {
    env_logger::init();

    // Logical AND: only [1, 1] is positive
    let x = array![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let y = array![0.0, 0.0, 0.0, 1.0];

    let mut model = LogisticRegression::new(LogisticConfig::new(0.1, 1000, None, 0.5));
    let options = FitOptions::default().with_plot("and_gate_loss.html");
    let summary = model.fit(&x, &y, None, None, &options)?;

    println!("Iterations run: {}", summary.iterations);
    if let (Some(weights), Some(bias)) = (model.weights(), model.bias()) {
        println!("Weights: {}  Bias: {:.4}", weights, bias);
    }
    println!("Probabilities: {}", model.predict_proba(&x)?);
    println!("Predictions:   {}", model.predict(&x)?);

    Ok(())
}
