//! Reverse-mode differentiation over the scalar graph.
//!
//! - [`backward_op`]: the per-node propagation rule ([`Op`]).
//! - [`topo`]: topological ordering and the backward pass ([`compute_gradients`]).
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod topo;

pub use backward_op::{Op, Predecessors};
pub use grad_check::{check_grad, numerical_grad, GradCheckError};
pub use topo::compute_gradients;
