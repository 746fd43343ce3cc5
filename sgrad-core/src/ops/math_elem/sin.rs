use crate::autograd::Op;
use crate::scalar::Scalar;

/// `c = sin(a)`; propagation `a.grad += cos(a) * c.grad`.
pub fn sin_op(a: Scalar<'_>) -> Scalar<'_> {
    a.graph().push(a.value().sin(), Op::Sin(a.id()))
}

impl<'g> Scalar<'g> {
    pub fn sin(self) -> Scalar<'g> {
        sin_op(self)
    }
}

#[cfg(test)]
#[path = "sin_test.rs"]
mod tests;
