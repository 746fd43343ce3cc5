use crate::autograd::Op;
use crate::scalar::Scalar;

/// Fused hyperbolic tangent; propagation `a.grad += (1 - c²) * c.grad`.
pub fn tanh_op(a: Scalar<'_>) -> Scalar<'_> {
    a.graph().push(a.value().tanh(), Op::Tanh(a.id()))
}

impl<'g> Scalar<'g> {
    pub fn tanh(self) -> Scalar<'g> {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
