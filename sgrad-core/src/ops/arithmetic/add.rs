use crate::autograd::Op;
use crate::ops::{coerce, Operand};
use crate::scalar::Scalar;
use std::ops::{Add, AddAssign};

/// `c = a + b`; propagation `a.grad += c.grad`, `b.grad += c.grad`.
pub fn add_op<'g, R: Operand<'g>>(a: Scalar<'g>, b: R) -> Scalar<'g> {
    let (a, b) = coerce(a, b);
    let value = a.value() + b.value();
    a.graph().push(value, Op::Add(a.id(), b.id()))
}

impl<'g, R: Operand<'g>> Add<R> for Scalar<'g> {
    type Output = Scalar<'g>;

    fn add(self, rhs: R) -> Self::Output {
        add_op(self, rhs)
    }
}

impl<'g, R: Operand<'g>> AddAssign<R> for Scalar<'g> {
    fn add_assign(&mut self, rhs: R) {
        *self = add_op(*self, rhs);
    }
}

impl_literal_lhs!(Add, add, add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
