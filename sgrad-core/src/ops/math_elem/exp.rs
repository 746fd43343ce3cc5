use crate::autograd::Op;
use crate::scalar::Scalar;

/// `c = exp(a)`; propagation `a.grad += c.value * c.grad`.
pub fn exp_op(a: Scalar<'_>) -> Scalar<'_> {
    a.graph().push(a.value().exp(), Op::Exp(a.id()))
}

impl<'g> Scalar<'g> {
    pub fn exp(self) -> Scalar<'g> {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
