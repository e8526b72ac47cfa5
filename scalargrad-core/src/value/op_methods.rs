use crate::ops::{pow_op, relu_op, tanh_op};
use crate::value::Value;

impl Value {
    /// Raises this node to a constant power. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// Hyperbolic tangent of this node. See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    /// `max(0, self)`. See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}
