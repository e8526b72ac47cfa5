// scalargrad-core/src/ops/arithmetic/div.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Divides two nodes: `a / b`.
///
/// The forward value follows IEEE semantics (division by zero yields an
/// infinity or NaN). There is no gradient rule: any `backward()` whose graph
/// contains a division fails with `UnsupportedOperation`.
pub fn div_op(a: &Value, b: &Value) -> Value {
    let value = a.value() / b.value();
    Value::from_op(
        value,
        BackwardOp::Div {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
