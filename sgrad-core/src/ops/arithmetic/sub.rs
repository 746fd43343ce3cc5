use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::{coerce, Operand};
use crate::scalar::Scalar;
use std::ops::{Sub, SubAssign};

/// `a - b`, built as `a + (-b)`.
pub fn sub_op<'g, R: Operand<'g>>(a: Scalar<'g>, b: R) -> Scalar<'g> {
    let (a, b) = coerce(a, b);
    add_op(a, neg_op(b))
}

impl<'g, R: Operand<'g>> Sub<R> for Scalar<'g> {
    type Output = Scalar<'g>;

    fn sub(self, rhs: R) -> Self::Output {
        sub_op(self, rhs)
    }
}

impl<'g, R: Operand<'g>> SubAssign<R> for Scalar<'g> {
    fn sub_assign(&mut self, rhs: R) {
        *self = sub_op(*self, rhs);
    }
}

impl_literal_lhs!(Sub, sub, sub_op);

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
