use crate::autograd::BackwardOp;
use crate::value::Value;

/// Applies the hyperbolic tangent to a node.
///
/// The forward result is cached in the backward context, whose rule is
/// `(1 - tanh(x)^2) * grad`.
pub fn tanh_op(input: &Value) -> Value {
    let output = input.value().tanh();
    Value::from_op(
        output,
        BackwardOp::Tanh {
            input: input.clone(),
            output,
        },
    )
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
