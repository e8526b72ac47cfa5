use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single unit computing `activation(sum(weight_i * input_i) + bias)`.
///
/// The neuron owns its weight and bias nodes exclusively; they persist across
/// forward/backward cycles and are updated in place.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights, all parameters drawn from `init`.
    ///
    /// # Errors
    /// `InvalidArgument` if `n_inputs` is 0 or `init` is invalid.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if n_inputs == 0 {
            return Err(ScalarGradError::InvalidArgument(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let mut values = init.sample_n(n_inputs + 1, rng)?;
        let bias = values.pop().unwrap_or_default();
        Self::from_parameters(values, bias, activation)
    }

    /// Creates a neuron from explicit initial values.
    ///
    /// # Errors
    /// `InvalidArgument` if `weights` is empty.
    pub fn from_parameters(
        weights: Vec<f64>,
        bias: f64,
        activation: Activation,
    ) -> Result<Self, ScalarGradError> {
        if weights.is_empty() {
            return Err(ScalarGradError::InvalidArgument(
                "a neuron needs at least one input".to_string(),
            ));
        }
        Ok(Neuron {
            weights: weights.into_iter().map(Value::new).collect(),
            bias: Value::new(bias),
            activation,
        })
    }

    /// Builds the neuron's output node for `inputs`.
    ///
    /// The pre-activation is accumulated left to right starting from the bias:
    /// `((bias + w0*x0) + w1*x1) + ...`.
    ///
    /// # Errors
    /// `LengthMismatch` if `inputs.len()` differs from the number of weights.
    /// Nothing is added to the graph in that case.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::LengthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron forward".to_string(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);
        Ok(self.activation.apply(&pre_activation))
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        params.push(("bias".to_string(), self.bias.clone()));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
