use anyhow::Result;
use logreg::{FitOptions, LogisticConfig, LogisticRegression};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two noisy Gaussian-ish blobs around (-1, -1) and (1, 1).
fn make_blobs(rng: &mut StdRng, n: usize, noise: f64) -> Result<(Array2<f64>, Array1<f64>)> {
    let mut features = Vec::with_capacity(n * 2);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let label = (i % 2) as f64;
        let center = if label == 1.0 { 1.0 } else { -1.0 };
        features.push(center + rng.gen_range(-noise..noise));
        features.push(center + rng.gen_range(-noise..noise));
        labels.push(label);
    }
    Ok((Array2::from_shape_vec((n, 2), features)?, Array1::from_vec(labels)))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let (x_train, y_train) = make_blobs(&mut rng, 200, 2.5)?;
    let (x_val, y_val) = make_blobs(&mut rng, 60, 2.5)?;

    println!("Train X shape: {:?}", x_train.shape());
    println!("Val X shape: {:?}", x_val.shape());

    let mut model = LogisticRegression::new(LogisticConfig::new(0.5, 5000, Some(25), 0.5));
    let options = FitOptions::default().with_plot("early_stopping_loss.html");
    let summary = model.fit(&x_train, &y_train, Some(&x_val), Some(&y_val), &options)?;

    match summary.early_stop {
        Some(stop) => println!(
            "Stopped at iteration {} with best validation loss {:.6}",
            stop.iteration + 1,
            stop.best_val_loss
        ),
        None => println!("Ran all {} iterations", summary.iterations),
    }

    let predictions = model.predict(&x_val)?;
    let correct = predictions
        .iter()
        .zip(y_val.iter())
        .filter(|&(&p, &y)| p as f64 == y)
        .count();
    println!("Validation accuracy: {:.3}", correct as f64 / y_val.len() as f64);

    Ok(())
}
