use crate::autograd::Op;
use crate::error::SgradError;
use crate::scalar::Scalar;

/// `c = ln(a)`; propagation `a.grad += (1 / a) * c.grad`.
///
/// # Errors
///
/// `DomainError` when `a.value() <= 0`. No node is allocated.
pub fn ln_op(a: Scalar<'_>) -> Result<Scalar<'_>, SgradError> {
    let x = a.value();
    if x <= 0.0 {
        return Err(SgradError::domain("log", x));
    }
    Ok(a.graph().push(x.ln(), Op::Log(a.id())))
}

impl<'g> Scalar<'g> {
    /// Natural logarithm. See [`ln_op`].
    pub fn log(self) -> Result<Scalar<'g>, SgradError> {
        ln_op(self)
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
