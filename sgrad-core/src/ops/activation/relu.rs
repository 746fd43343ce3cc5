use crate::autograd::Op;
use crate::scalar::Scalar;

/// `c = max(a, 0)`; propagation `a.grad += (c > 0 ? 1 : 0) * c.grad`.
///
/// The slope at exactly zero is taken as 0.
pub fn relu_op(a: Scalar<'_>) -> Scalar<'_> {
    a.graph().push(a.value().max(0.0), Op::Relu(a.id()))
}

impl<'g> Scalar<'g> {
    pub fn relu(self) -> Scalar<'g> {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
