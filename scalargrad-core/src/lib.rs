//! A minimal scalar reverse-mode automatic differentiation engine, with
//! neurons, layers and multilayer perceptrons built on top of it.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod value;
pub mod value_data;

pub use autograd::{BackwardOp, OpTag};
pub use error::ScalarGradError;
pub use value::{NodeId, Value};
// Re-export traits required by public functions/structs
pub use num_traits;
