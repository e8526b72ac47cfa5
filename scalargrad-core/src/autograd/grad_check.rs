use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Engine error during gradient check: {0}")]
    EngineError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::EngineError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives one fresh leaf per entry of `inputs` and must return the
/// scalar output. For every input `x_i` the analytical gradient from
/// `backward()` is compared with `(f(x_i + eps) - f(x_i - eps)) / (2 * eps)`.
///
/// A pair is accepted when it is within `tolerance` either absolutely or
/// relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves)?;
    output.backward()?;
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients, one input at a time ---
    let evaluate = |perturbed: &[f64]| -> Result<f64, ScalarGradError> {
        let leaves: Vec<Value> = perturbed.iter().map(|&x| Value::new(x)).collect();
        Ok(func(&leaves)?.value())
    };

    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut plus = inputs.to_vec();
        plus[input_index] += epsilon;
        let mut minus = inputs.to_vec();
        minus[input_index] -= epsilon;

        let loss_plus = evaluate(&plus)?;
        let loss_minus = evaluate(&minus)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance
            && !relative_eq!(analytical_grad, numerical_grad, max_relative = tolerance)
        {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}
