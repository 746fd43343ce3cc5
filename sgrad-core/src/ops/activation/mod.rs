//! Activation functions. `sigmoid` and `tanh` are fused: each adds a single
//! node with a closed-form local derivative.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
