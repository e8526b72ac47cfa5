use crate::autograd::{BackwardOp, OpTag};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::div_op;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let a = Value::new(10.0);
    let b = Value::new(4.0);
    let c = div_op(&a, &b);
    assert_relative_eq!(c.value(), 2.5);
    assert_eq!(c.op_tag(), OpTag::Divide);
}

#[test]
fn test_div_by_zero_passes_through() {
    let c = div_op(&Value::new(1.0), &Value::new(0.0));
    assert!(c.value().is_infinite());
}

#[test]
fn test_div_backward_is_unsupported() {
    let a = Value::new(10.0);
    let b = Value::new(4.0);
    let c = div_op(&a, &b);
    let result = c.backward();
    assert!(matches!(result, Err(ScalarGradError::UnsupportedOperation(_))));
}

#[test]
fn test_div_backward_leaves_gradients_untouched() {
    // The division sits deep inside the graph; nothing may be written.
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    a.write_data().grad = 0.5;
    let q = div_op(&a, &b);
    let out = &(&q + &a) * &b;

    assert!(out.backward().is_err());
    assert_eq!(a.grad(), 0.5);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(out.grad(), 0.0);
}

#[test]
fn test_div_local_gradients_fail() {
    let op = BackwardOp::Div {
        lhs: Value::new(1.0),
        rhs: Value::new(2.0),
    };
    assert!(matches!(
        op.local_gradients(1.0),
        Err(ScalarGradError::UnsupportedOperation(_))
    ));
}
