// src/value/traits.rs

use crate::ops::{add_op, div_op, mul_op, pow_op, sub_op};
use crate::value::Value;
use std::fmt::{self, Debug};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Clones the handle. This is a shallow clone that increases the reference
    /// count of the underlying node: both handles see the same value and
    /// gradient.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl Debug for Value {
    /// Shows value, gradient, producing operation and label. Operands are not
    /// printed, so formatting a large graph stays cheap.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        write!(f, "Value(value={}, grad={}", data.value, data.grad)?;
        if let Some(op) = data.grad_fn.as_ref() {
            write!(f, ", op={:?}", op.tag())?;
        }
        if let Some(label) = data.label.as_ref() {
            write!(f, ", label={:?}", label)?;
        }
        write!(f, ")")
    }
}

/// Promotes a raw number to a constant leaf node.
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::new(value)
    }
}

// --- std::ops ---
//
// Every combination of owned/borrowed `Value` and `f64` operands. Raw numbers
// are promoted to fresh constant leaves.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a> $trait<&'a Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: &'a Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::from(rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::from(rhs))
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::from(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::from(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

/// Negation is expressed as multiplication by the constant `-1`.
impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        mul_op(self, &Value::from(-1.0))
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        -&self
    }
}

/// Sums nodes left to right, starting from a constant `0`.
impl Sum<Value> for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::from(0.0), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::from(0.0), |acc, v| add_op(&acc, v))
    }
}

impl num_traits::Pow<f64> for &Value {
    type Output = Value;
    fn pow(self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

impl num_traits::Pow<f64> for Value {
    type Output = Value;
    fn pow(self, exponent: f64) -> Value {
        pow_op(&self, exponent)
    }
}
