use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all network components (neurons, layers, MLPs).
///
/// Implementors only describe their forward pass and their parameters; the
/// training contract (`zero_grad`, `update`) is provided on top of
/// `parameters()`.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building new graph nodes on top of `inputs`.
    ///
    /// # Errors
    /// `LengthMismatch` if `inputs` does not match the module's input width.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns handles to every trainable parameter, in a stable order.
    ///
    /// The handles share the module's nodes: updating a returned `Value`
    /// updates the module.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters together with hierarchical names
    /// (e.g. `"layers.1.neurons.0.weight.2"`), in the order of `parameters()`.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to 0.
    ///
    /// Must be called before each new backward pass because `backward()`
    /// accumulates into leaf gradients.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Plain gradient descent: `value <- value - learning_rate * grad` for
    /// every parameter. Meant to run after a backward pass.
    fn update(&self, learning_rate: f64) {
        for param in self.parameters() {
            param.set_value(param.value() - learning_rate * param.grad());
        }
    }
}
