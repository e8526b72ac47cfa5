// src/nn/losses/mod.rs

pub mod mse;

pub use mse::{mse_loss, MSELoss, Reduction};
