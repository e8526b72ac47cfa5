// src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: `mean` or `sum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidArgument(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Mean => f.write_str("mean"),
            Reduction::Sum => f.write_str("sum"),
        }
    }
}

/// Mean Squared Error between predicted nodes and raw targets.
///
/// The loss is composed from primitive operations only (`sub`, `pow(2)`, a
/// sum and, for `Mean`, a multiplication by `1/n`), so its gradient flows
/// through the regular engine rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node for `predictions` against `targets`.
    ///
    /// # Errors
    /// * `LengthMismatch` if the slices differ in length.
    /// * `InvalidArgument` if they are empty.
    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[f64],
    ) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::LengthMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::InvalidArgument(
                "MSELoss requires at least one prediction".to_string(),
            ));
        }

        let squared_errors = predictions
            .iter()
            .zip(targets)
            .map(|(prediction, &target)| (prediction - target).pow(2.0));
        let total = squared_errors
            .reduce(|acc, err| acc + err)
            .ok_or_else(|| {
                ScalarGradError::InvalidArgument("MSELoss requires at least one prediction".to_string())
            })?;

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total * (1.0 / predictions.len() as f64),
        })
    }
}

/// Mean squared error with `Mean` reduction.
pub fn mse_loss(predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
    MSELoss::new(Reduction::Mean).calculate(predictions, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
