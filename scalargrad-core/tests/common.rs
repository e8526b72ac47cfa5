use scalargrad_core::nn::{Activation, Layer, Mlp, Neuron};
use scalargrad_core::ScalarGradError;

// Each integration test binary compiles this module separately; not every
// binary uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A 3 -> [2, 3, 1] ReLU network with fixed initial weights.
///
/// From input `[1, 1, 1]` it outputs about 1.47 and trains to 34 with plain
/// gradient descent at `lr = 0.01`.
#[allow(dead_code)]
pub fn fixed_relu_mlp() -> Result<Mlp, ScalarGradError> {
    let layer = |params: Vec<(Vec<f64>, f64)>| -> Result<Layer, ScalarGradError> {
        let neurons = params
            .into_iter()
            .map(|(w, b)| Neuron::from_parameters(w, b, Activation::Relu))
            .collect::<Result<Vec<_>, _>>()?;
        Layer::from_neurons(neurons)
    };

    Mlp::from_layers(vec![
        layer(vec![
            (vec![0.69, 0.52, -0.16], -0.48),
            (vec![0.02, -0.19, 0.57], -0.39),
        ])?,
        layer(vec![
            (vec![-0.05, 0.17], 0.82),
            (vec![0.01, -0.44], 0.51),
            (vec![0.24, -0.5], 0.82),
        ])?,
        layer(vec![(vec![0.97, 0.62, 0.8], -0.38)])?,
    ])
}
