use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the gradients accumulated by
    /// the last backward pass.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it before each backward pass: leaf gradients accumulate.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    /// # Errors
    /// `InvalidArgument` if `lr` is not finite and strictly positive.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError>;
}
