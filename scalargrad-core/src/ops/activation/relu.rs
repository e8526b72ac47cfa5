use crate::autograd::BackwardOp;
use crate::value::Value;

/// Applies the Rectified Linear Unit to a node: `max(0, x)`.
///
/// Only negative inputs are clamped, so NaN passes through unchanged.
/// Backward: the output gradient passes through when the recorded output is
/// positive and is blocked otherwise (including at exactly 0).
pub fn relu_op(input: &Value) -> Value {
    let x = input.value();
    let output = if x < 0.0 { 0.0 } else { x };
    Value::from_op(
        output,
        BackwardOp::Relu {
            input: input.clone(),
            output,
        },
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
