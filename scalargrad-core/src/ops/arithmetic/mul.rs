// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Multiplies two nodes: `a * b`.
///
/// Backward: `a` receives `b.value * grad`, `b` receives `a.value * grad`,
/// using the operand values read here.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let lhs_value = a.value();
    let rhs_value = b.value();
    Value::from_op(
        lhs_value * rhs_value,
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
            lhs_value,
            rhs_value,
        },
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
