// src/optim/mod.rs

//! Optimizers that update network parameters from their accumulated
//! gradients.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;

#[cfg(test)]
mod sgd_test;
