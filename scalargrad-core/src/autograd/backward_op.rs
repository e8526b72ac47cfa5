use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt;

/// Which operation produced a node. Leaves report `OpTag::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpTag {
    None,
    Add,
    Multiply,
    Subtract,
    Power,
    Divide,
    Tanh,
    Relu,
}

impl fmt::Display for OpTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpTag::None => "",
            OpTag::Add => "+",
            OpTag::Multiply => "*",
            OpTag::Subtract => "-",
            OpTag::Power => "pow",
            OpTag::Divide => "/",
            OpTag::Tanh => "tanh",
            OpTag::Relu => "relu",
        };
        f.write_str(name)
    }
}

/// Backward context recorded by every operation that creates a non-leaf node.
///
/// Each variant stores the operands of the forward call plus the minimal
/// forward state its local-gradient rule needs. It is stored in the output
/// node's `grad_fn` and consulted by `Value::backward()` to push the output's
/// gradient onto the operands according to the chain rule.
///
/// Operand handles are strong references: a node keeps its whole input
/// subgraph alive, and since operands always exist before the node that uses
/// them, ownership follows the (acyclic) graph edges.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    Add { lhs: Value, rhs: Value },
    Sub { lhs: Value, rhs: Value },
    /// `lhs_value` and `rhs_value` are the operand values seen by the forward pass.
    Mul {
        lhs: Value,
        rhs: Value,
        lhs_value: f64,
        rhs_value: f64,
    },
    /// `exponent` is a plain constant; no gradient flows into it.
    Pow {
        base: Value,
        base_value: f64,
        exponent: f64,
    },
    /// Forward only. Its gradient rule is deliberately not provided.
    Div { lhs: Value, rhs: Value },
    /// `output` caches `tanh(input)` from the forward pass.
    Tanh { input: Value, output: f64 },
    /// `output` caches `max(0, input)` from the forward pass.
    Relu { input: Value, output: f64 },
}

impl BackwardOp {
    pub fn tag(&self) -> OpTag {
        match self {
            BackwardOp::Add { .. } => OpTag::Add,
            BackwardOp::Sub { .. } => OpTag::Subtract,
            BackwardOp::Mul { .. } => OpTag::Multiply,
            BackwardOp::Pow { .. } => OpTag::Power,
            BackwardOp::Div { .. } => OpTag::Divide,
            BackwardOp::Tanh { .. } => OpTag::Tanh,
            BackwardOp::Relu { .. } => OpTag::Relu,
        }
    }

    /// Returns the operands that participated in the forward operation.
    ///
    /// The order matches the order of the values returned by
    /// `local_gradients()`. The same node may appear twice (e.g. `a * a`).
    pub fn inputs(&self) -> Vec<&Value> {
        match self {
            BackwardOp::Add { lhs, rhs }
            | BackwardOp::Sub { lhs, rhs }
            | BackwardOp::Mul { lhs, rhs, .. }
            | BackwardOp::Div { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input, .. } | BackwardOp::Relu { input, .. } => vec![input],
        }
    }

    /// Consumes the context and hands back its operand handles.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            BackwardOp::Add { lhs, rhs }
            | BackwardOp::Sub { lhs, rhs }
            | BackwardOp::Mul { lhs, rhs, .. }
            | BackwardOp::Div { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input, .. } | BackwardOp::Relu { input, .. } => vec![input],
        }
    }

    /// Computes the contribution of `grad_output` (dL/dOutput) to each input.
    ///
    /// Returns one value per entry of `inputs()`, in the same order. The caller
    /// is responsible for adding them into the inputs' gradients.
    ///
    /// # Errors
    /// `UnsupportedOperation` for `Div`: dividing is allowed in the forward
    /// pass, but differentiating through it must fail rather than silently
    /// produce a wrong gradient.
    pub fn local_gradients(&self, grad_output: f64) -> Result<Vec<f64>, ScalarGradError> {
        let grads = match self {
            BackwardOp::Add { .. } => vec![grad_output, grad_output],
            BackwardOp::Sub { .. } => vec![grad_output, -grad_output],
            BackwardOp::Mul {
                lhs_value,
                rhs_value,
                ..
            } => vec![rhs_value * grad_output, lhs_value * grad_output],
            BackwardOp::Pow {
                base_value,
                exponent,
                ..
            } => vec![exponent * base_value.powf(exponent - 1.0) * grad_output],
            BackwardOp::Div { .. } => {
                return Err(ScalarGradError::UnsupportedOperation(
                    "backward through division is not implemented".to_string(),
                ))
            }
            BackwardOp::Tanh { output, .. } => vec![(1.0 - output * output) * grad_output],
            BackwardOp::Relu { output, .. } => {
                if *output > 0.0 {
                    vec![grad_output]
                } else {
                    vec![0.0]
                }
            }
        };
        Ok(grads)
    }
}
