use crate::autograd::Op;
use crate::ops::{coerce, Operand};
use crate::scalar::Scalar;
use std::ops::{Mul, MulAssign};

/// `c = a * b`; propagation `a.grad += b.value * c.grad`,
/// `b.grad += a.value * c.grad`.
pub fn mul_op<'g, R: Operand<'g>>(a: Scalar<'g>, b: R) -> Scalar<'g> {
    let (a, b) = coerce(a, b);
    let value = a.value() * b.value();
    a.graph().push(value, Op::Mul(a.id(), b.id()))
}

impl<'g, R: Operand<'g>> Mul<R> for Scalar<'g> {
    type Output = Scalar<'g>;

    fn mul(self, rhs: R) -> Self::Output {
        mul_op(self, rhs)
    }
}

impl<'g, R: Operand<'g>> MulAssign<R> for Scalar<'g> {
    fn mul_assign(&mut self, rhs: R) {
        *self = mul_op(*self, rhs);
    }
}

impl_literal_lhs!(Mul, mul, mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
