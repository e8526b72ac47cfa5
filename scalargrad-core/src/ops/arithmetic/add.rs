// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Adds two nodes: `a + b`.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let value = a.value() + b.value();
    Value::from_op(
        value,
        BackwardOp::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
