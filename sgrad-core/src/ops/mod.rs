//! # Scalar Operations Module (`ops`)
//!
//! Every operation allocates one new node in the operands' [`Graph`], records
//! its direct operands and tags the node with the [`Op`](crate::autograd::Op)
//! variant that encodes its local derivative. No existing gradient is
//! touched while building.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`,
//!   `pow_op`, ...) performing the forward computation and the graph
//!   linkage. Operator traits (`+ - * /`, unary `-`) and the methods on
//!   [`Scalar`] call into them.
//! - **Composite operations:** `neg`, `sub` and `div` are built from `mul`,
//!   `add` and `powf`, so they inherit those derivative rules.
//! - **[`Operand`]:** the single conversion point that lets numeric literals
//!   stand in for nodes.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div.
//! - [`math_elem`]: sin, exp, ln.
//! - [`activation`]: relu, sigmoid, tanh.

use crate::graph::Graph;
use crate::scalar::Scalar;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, powf_op, sub_op};
pub use math_elem::{exp_op, ln_op, sin_op};

/// A value usable as an operand next to a node of `graph`: either a node
/// of the same graph or a numeric literal, which is wrapped into a fresh
/// leaf node.
pub trait Operand<'g> {
    /// Converts the operand into a node of `graph`.
    ///
    /// # Panics
    ///
    /// Panics if the operand is a node of a different graph.
    fn into_scalar(self, graph: &'g Graph) -> Scalar<'g>;
}

impl<'g> Operand<'g> for Scalar<'g> {
    fn into_scalar(self, graph: &'g Graph) -> Scalar<'g> {
        assert!(
            std::ptr::eq(self.graph(), graph),
            "cannot combine scalars from different graphs"
        );
        self
    }
}

impl<'g> Operand<'g> for &Scalar<'g> {
    fn into_scalar(self, graph: &'g Graph) -> Scalar<'g> {
        (*self).into_scalar(graph)
    }
}

macro_rules! impl_literal_operand {
    ($($t:ty),*) => {
        $(
            impl<'g> Operand<'g> for $t {
                fn into_scalar(self, graph: &'g Graph) -> Scalar<'g> {
                    graph.scalar(self as f64)
                }
            }
        )*
    };
}

impl_literal_operand!(f64, f32, i32, i64, u32);

/// Resolves a binary operation's right-hand side against the left operand's graph.
pub(crate) fn coerce<'g, R: Operand<'g>>(lhs: Scalar<'g>, rhs: R) -> (Scalar<'g>, Scalar<'g>) {
    let rhs = rhs.into_scalar(lhs.graph());
    (lhs, rhs)
}
