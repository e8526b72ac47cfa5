//! # Reverse-mode differentiation
//!
//! - [`backward_op`]: the tagged backward contexts recorded by each operation,
//!   together with their local-gradient rules.
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - [`grad_check`]: numerical verification of analytical gradients.
//!
//! The entry point of a pass is [`Value::backward`](crate::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{BackwardOp, OpTag};
pub use graph::topological_sort;
