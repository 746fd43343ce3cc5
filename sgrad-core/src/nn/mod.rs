// src/nn/mod.rs
// Neurons, layers and multi-layer perceptrons built from scalar operations.

pub mod activation;
pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

// Re-export common items
pub use activation::Activation;
pub use init::Init;
pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
