use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::{init_rng, Init};
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::value::Value;

/// Construction parameters of an [`Mlp`].
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    /// Width of the input vector.
    pub n_inputs: usize,
    /// Output width of each layer, first to last.
    pub layer_sizes: Vec<usize>,
    /// Activation applied by every neuron.
    pub activation: Activation,
    pub init: Init,
    /// Seed for the initialization RNG; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl MlpConfig {
    pub fn new(n_inputs: usize, layer_sizes: Vec<usize>) -> Self {
        MlpConfig {
            n_inputs,
            layer_sizes,
            activation: Activation::default(),
            init: Init::default(),
            seed: None,
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    /// `InvalidArgument` for a zero input width, an empty shape, a zero-width
    /// layer, or invalid `init` parameters.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.n_inputs == 0 {
            return Err(ScalarGradError::InvalidArgument(
                "an MLP needs at least one input".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidArgument(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if let Some(index) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(ScalarGradError::InvalidArgument(format!(
                "layer {} has zero outputs",
                index
            )));
        }
        self.init.validate()
    }
}

/// A multilayer perceptron: layers applied in sequence, each feeding the
/// next.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP with default activation (ReLU) and initialization
    /// (uniform on [-1, 1)).
    ///
    /// `layer_sizes` lists the output width of every layer; the input width
    /// of layer `i + 1` is the output width of layer `i`.
    pub fn new(n_inputs: usize, layer_sizes: &[usize]) -> Result<Self, ScalarGradError> {
        Self::from_config(&MlpConfig::new(n_inputs, layer_sizes.to_vec()))
    }

    pub fn from_config(config: &MlpConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let mut rng = init_rng(config.seed);

        let mut layers = Vec::with_capacity(config.layer_sizes.len());
        let mut n_inputs = config.n_inputs;
        for &n_outputs in &config.layer_sizes {
            layers.push(Layer::new(
                n_inputs,
                n_outputs,
                config.activation,
                &config.init,
                &mut rng,
            )?);
            n_inputs = n_outputs;
        }

        let mlp = Self::from_layers(layers)?;
        log::debug!(
            "Built MLP {} -> {:?} ({}, {} parameters)",
            config.n_inputs,
            config.layer_sizes,
            config.activation,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Assembles an MLP from existing layers.
    ///
    /// # Errors
    /// * `InvalidArgument` if `layers` is empty.
    /// * `LengthMismatch` if a layer's input width differs from the previous
    ///   layer's output width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidArgument(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[1].n_inputs() != pair[0].n_outputs() {
                return Err(ScalarGradError::LengthMismatch {
                    expected: pair[0].n_outputs(),
                    actual: pair[1].n_inputs(),
                    operation: "MLP construction".to_string(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    /// Promotes raw inputs to constant nodes and runs `forward`.
    pub fn forward_values(&self, inputs: &[f64]) -> Result<Vec<Value>, ScalarGradError> {
        let inputs: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
        self.forward(&inputs)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_inputs(&self) -> usize {
        self.layers[0].n_inputs()
    }

    pub fn n_outputs(&self) -> usize {
        self.layers[self.layers.len() - 1].n_outputs()
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Parameters of every layer, flattened in layer order.
    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
