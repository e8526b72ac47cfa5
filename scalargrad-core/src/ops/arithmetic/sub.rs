// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Subtracts two nodes: `a - b`.
///
/// Backward: `a` receives the output gradient, `b` its negation.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    let value = a.value() - b.value();
    Value::from_op(
        value,
        BackwardOp::Sub {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
