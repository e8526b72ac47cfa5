// src/nn/mod.rs
// Neurons, layers, multilayer perceptrons and losses built on scalar nodes.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module

// Re-export common items
pub use activation::Activation;
pub use init::Init;
pub use layers::{Layer, Neuron};
pub use losses::{mse_loss, MSELoss, Reduction};
pub use mlp::{Mlp, MlpConfig};
pub use module::Module;
