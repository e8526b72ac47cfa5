use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Stochastic Gradient Descent with optional classical momentum.
///
/// For every parameter `p` with gradient `g`:
/// `v <- momentum * v + g`, then `p <- p - lr * v`.
/// With `momentum == 0` this is exactly `Module::update(lr)`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    // One velocity per parameter, same order as `params`.
    velocity: Vec<f64>,
}

fn check_learning_rate(lr: f64) -> Result<(), ScalarGradError> {
    if !(lr.is_finite() && lr > 0.0) {
        return Err(ScalarGradError::InvalidArgument(format!(
            "learning rate must be finite and > 0, got {}",
            lr
        )));
    }
    Ok(())
}

impl SgdOptimizer {
    /// Creates an optimizer over `params`, typically `module.parameters()`.
    ///
    /// # Errors
    /// `InvalidArgument` for a non-positive or non-finite `lr`, or a negative
    /// or non-finite `momentum`.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
        momentum: f64,
    ) -> Result<Self, ScalarGradError> {
        check_learning_rate(lr)?;
        if !(momentum.is_finite() && momentum >= 0.0) {
            return Err(ScalarGradError::InvalidArgument(format!(
                "momentum must be finite and >= 0, got {}",
                momentum
            )));
        }
        let params: Vec<Value> = params.into_iter().collect();
        let velocity = vec![0.0; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum,
            velocity,
        })
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        let mut non_finite = 0usize;
        for (param, velocity) in self.params.iter().zip(self.velocity.iter_mut()) {
            let grad = param.grad();
            if !grad.is_finite() {
                non_finite += 1;
            }
            let direction = if self.momentum != 0.0 {
                *velocity = self.momentum * *velocity + grad;
                *velocity
            } else {
                grad
            };
            param.set_value(param.value() - self.lr * direction);
        }
        if non_finite > 0 {
            log::warn!(
                "SGD step applied {} non-finite gradient(s) out of {}",
                non_finite,
                self.params.len()
            );
        }
        log::debug!(
            "SGD step: {} parameters, lr={}, momentum={}",
            self.params.len(),
            self.lr,
            self.momentum
        );
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        check_learning_rate(lr)?;
        self.lr = lr;
        Ok(())
    }
}
