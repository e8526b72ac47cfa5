// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Raises a node to a constant power: `base ^ exponent`.
///
/// The exponent is a plain number, not a graph node, so no gradient flows into
/// it. Backward: `base` receives `exponent * base^(exponent - 1) * grad`.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let base_value = base.value();
    Value::from_op(
        base_value.powf(exponent),
        BackwardOp::Pow {
            base: base.clone(),
            base_value,
            exponent,
        },
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
