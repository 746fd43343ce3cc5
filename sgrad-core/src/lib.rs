//! # sgrad-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Applying operators to [`Scalar`] handles builds a directed acyclic graph
//! inside a [`Graph`] arena. [`compute_gradients`] (or [`Scalar::backward`])
//! then orders the ancestors of a node topologically and pushes gradients
//! back through every node's propagation rule in a single reverse pass.
//!
//! ```
//! use sgrad_core::Graph;
//!
//! let graph = Graph::new();
//! let x = graph.scalar(2.0);
//! let y = x * x + x * 3.0;
//! y.backward();
//! assert_eq!(y.value(), 10.0);
//! assert_eq!(x.grad(), 7.0);
//! ```
//!
//! The [`nn`] module builds neurons, layers and multi-layer perceptrons on
//! top of the same operations.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod ops;
pub mod scalar;
pub mod utils;

pub use autograd::compute_gradients;
pub use error::SgradError;
pub use graph::{Checkpoint, Graph, NodeId};
pub use ops::Operand;
pub use scalar::Scalar;
