use crate::autograd::Op;
use crate::scalar::Scalar;

/// Fused logistic sigmoid `c = 1 / (1 + exp(-a))`; propagation
/// `a.grad += c * (1 - c) * c.grad`.
pub fn sigmoid_op(a: Scalar<'_>) -> Scalar<'_> {
    a.graph().push(logistic(a.value()), Op::Sigmoid(a.id()))
}

/// Evaluated so that `exp` never overflows for large `|x|`.
fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

impl<'g> Scalar<'g> {
    pub fn sigmoid(self) -> Scalar<'g> {
        sigmoid_op(self)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
