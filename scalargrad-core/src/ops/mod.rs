//! # Scalar Operations Module (`ops`)
//!
//! Every operation is a pure function (`xxx_op`) that reads its operands'
//! values, allocates a new node holding the result, and records a
//! [`BackwardOp`](crate::autograd::BackwardOp) context in it. Operands are
//! never mutated here; their gradients only change later, during
//! [`Value::backward`](crate::Value::backward).
//!
//! The `std::ops` operators and the inherent methods on `Value` (`pow`, `tanh`,
//! `relu`) are thin wrappers over these functions.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div and the constant power.
//! - [`activation`]: tanh and ReLU.

pub mod activation;
pub mod arithmetic;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, pow_op, sub_op};
