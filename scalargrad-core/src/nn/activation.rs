use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied at the output of a neuron.
///
/// Resolved once when a neuron is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    /// Smooth saturating non-linearity.
    Tanh,
    /// `max(0, x)`
    #[default]
    Relu,
}

impl Activation {
    /// Applies the activation to `x`, recording it in the graph.
    pub fn apply(&self, x: &Value) -> Value {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Tanh => f.write_str("tanh"),
            Activation::Relu => f.write_str("relu"),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            _ => Err(ScalarGradError::InvalidArgument(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}
