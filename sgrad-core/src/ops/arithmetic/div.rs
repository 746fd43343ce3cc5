use crate::error::SgradError;
use crate::graph::{Checkpoint, Graph};
use crate::ops::arithmetic::{mul_op, powf_op};
use crate::ops::{coerce, Operand};
use crate::scalar::Scalar;
use std::ops::Div;

/// `a / b`, built as `a * b^-1` so it reuses the multiplication and power
/// rules.
///
/// # Errors
///
/// `DomainError` when `b.value() <= 0`, the domain of the power step. A
/// literal divisor wrapped for this call is discarded again on failure, so
/// the graph is left as it was.
pub fn div_op<'g, R: Operand<'g>>(a: Scalar<'g>, b: R) -> Result<Scalar<'g>, SgradError> {
    let graph = a.graph();
    let mark = graph.checkpoint();
    let (a, b) = coerce(a, b);
    let reciprocal = discard_on_err(graph, mark, powf_op(b, -1.0))?;
    Ok(mul_op(a, reciprocal))
}

fn discard_on_err<T>(
    graph: &Graph,
    mark: Checkpoint,
    result: Result<T, SgradError>,
) -> Result<T, SgradError> {
    if result.is_err() {
        graph.rewind(mark);
    }
    result
}

impl<'g, R: Operand<'g>> Div<R> for Scalar<'g> {
    type Output = Result<Scalar<'g>, SgradError>;

    fn div(self, rhs: R) -> Self::Output {
        div_op(self, rhs)
    }
}

macro_rules! impl_literal_div {
    ($($t:ty),*) => {
        $(
            impl<'g> Div<Scalar<'g>> for $t {
                type Output = Result<Scalar<'g>, SgradError>;

                fn div(self, rhs: Scalar<'g>) -> Self::Output {
                    let graph = rhs.graph();
                    let mark = graph.checkpoint();
                    let lhs = self.into_scalar(graph);
                    discard_on_err(graph, mark, div_op(lhs, rhs))
                }
            }
        )*
    };
}

impl_literal_div!(f64, i32);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
