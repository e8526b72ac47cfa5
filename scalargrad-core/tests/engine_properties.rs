mod common;

use approx::assert_relative_eq;
use scalargrad_core::autograd::grad_check::check_grad;
use scalargrad_core::autograd::topological_sort;
use scalargrad_core::{OpTag, ScalarGradError, Value};

#[test]
fn gradients_match_finite_differences() {
    common::init_logger();
    let func = |x: &[Value]| {
        let h = (&x[0] * &x[1] + &x[2]).tanh();
        let r = (&x[0] - &x[2]).relu();
        Ok(h.pow(2.0) * 3.0 + &r * &x[1] - 0.5)
    };
    assert_eq!(check_grad(func, &[0.7, -0.4, 0.1], 1e-6, 1e-5), Ok(()));
}

#[test]
fn every_node_in_the_closure_gets_a_gradient() -> Result<(), ScalarGradError> {
    common::init_logger();
    let a = Value::with_label(2.0, "a");
    let b = Value::with_label(-3.0, "b");
    let c = Value::with_label(10.0, "c");
    let e = &a * &b;
    let d = &e + &c;
    let f = Value::with_label(-2.0, "f");
    let l = &d * &f;
    assert_relative_eq!(l.value(), -8.0);

    l.backward()?;
    assert_relative_eq!(l.grad(), 1.0);
    assert_relative_eq!(f.grad(), 4.0);
    assert_relative_eq!(d.grad(), -2.0);
    assert_relative_eq!(c.grad(), -2.0);
    assert_relative_eq!(e.grad(), -2.0);
    assert_relative_eq!(a.grad(), 6.0);
    assert_relative_eq!(b.grad(), -4.0);

    let order = topological_sort(&l)?;
    assert_eq!(order.len(), 7);
    assert!(order.last().map_or(false, |n| n.ptr_eq(&l)));
    Ok(())
}

#[test]
fn unrelated_nodes_keep_their_gradient() -> Result<(), ScalarGradError> {
    let a = Value::new(1.0);
    let outsider = Value::new(5.0);
    let _unused = &outsider * 2.0;
    (&a * 3.0).backward()?;
    assert_eq!(outsider.grad(), 0.0);
    assert_eq!(a.grad(), 3.0);
    Ok(())
}

#[test]
fn division_forward_works_but_backward_is_rejected() {
    let a = Value::new(1.0);
    let b = Value::new(4.0);
    let q = (&a / &b) + &a;
    assert_relative_eq!(q.value(), 1.25);
    assert_eq!(q.operands()[0].op_tag(), OpTag::Divide);

    assert!(matches!(
        q.backward(),
        Err(ScalarGradError::UnsupportedOperation(_))
    ));
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(q.grad(), 0.0);
}

#[test]
fn relu_kink_and_tanh_saturation() -> Result<(), ScalarGradError> {
    let zero = Value::new(0.0);
    zero.relu().backward()?;
    assert_eq!(zero.grad(), 0.0);

    let big = Value::new(40.0);
    big.tanh().backward()?;
    assert_eq!(big.grad(), 0.0);
    Ok(())
}
