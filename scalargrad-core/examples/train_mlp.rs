//! # Training a small MLP with scalar autodiff
//!
//! Builds a 3 -> [4, 4, 1] tanh network, fits it to four labelled points
//! with mean squared error and plain gradient descent, and prints the loss
//! as it goes.
//!
//! ## Running
//! `RUST_LOG=debug cargo run --example train_mlp`

use scalargrad_core::nn::{mse_loss, Activation, Mlp, MlpConfig, Module};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    let _ = env_logger::try_init();

    let config = MlpConfig::new(3, vec![4, 4, 1])
        .with_activation(Activation::Tanh)
        .with_seed(42);
    let model = Mlp::from_config(&config)?;
    println!(
        "Model: {} inputs, {} layers, {} parameters",
        model.n_inputs(),
        model.layers().len(),
        model.num_parameters()
    );

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut optimizer = SgdOptimizer::new(model.parameters(), 0.1, 0.0)?;
    let num_epochs = 100;

    for epoch in 0..num_epochs {
        optimizer.zero_grad();

        let mut predictions: Vec<Value> = Vec::with_capacity(xs.len());
        for x in &xs {
            predictions.extend(model.forward_values(x)?);
        }
        let loss = mse_loss(&predictions, &ys)?;
        loss.backward()?;
        optimizer.step()?;

        if epoch % 10 == 0 || epoch == num_epochs - 1 {
            println!("Epoch {:3}: loss = {:.6}", epoch, loss.value());
        }
    }

    for (x, y) in xs.iter().zip(ys.iter()) {
        let prediction = model.forward_values(x)?[0].value();
        println!("{:?} -> {:+.4} (target {:+.1})", x, prediction, y);
    }
    Ok(())
}
