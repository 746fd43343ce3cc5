use crate::ops::arithmetic::mul_op;
use crate::scalar::Scalar;
use std::ops::Neg;

/// `-a`, built as `a * -1` so it reuses the multiplication rule.
pub fn neg_op(a: Scalar<'_>) -> Scalar<'_> {
    mul_op(a, -1.0)
}

impl<'g> Neg for Scalar<'g> {
    type Output = Scalar<'g>;

    fn neg(self) -> Self::Output {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
