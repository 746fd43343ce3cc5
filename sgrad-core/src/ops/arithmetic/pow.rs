use crate::autograd::Op;
use crate::error::SgradError;
use crate::ops::Operand;
use crate::scalar::Scalar;

/// Raises `base` to a node exponent: `c = a ** p`.
///
/// A literal exponent is wrapped into a leaf node, which then receives a
/// gradient like any other operand.
///
/// Propagation:
/// `a.grad += p * a^(p-1) * c.grad`, `p.grad += a^p * ln(a) * c.grad`.
///
/// # Errors
///
/// `DomainError` when `base.value() <= 0`, where `ln(a)` in the exponent
/// derivative is not a real number. The base is checked before the
/// exponent is wrapped, so nothing is allocated on failure.
pub fn pow_op<'g, R: Operand<'g>>(base: Scalar<'g>, exponent: R) -> Result<Scalar<'g>, SgradError> {
    let x = base.value();
    if x <= 0.0 {
        return Err(SgradError::domain("pow", x));
    }
    let exponent = exponent.into_scalar(base.graph());
    let value = x.powf(exponent.value());
    Ok(base.graph().push(
        value,
        Op::Pow {
            base: base.id(),
            exponent: exponent.id(),
        },
    ))
}

/// Raises `base` to a constant exponent: `c = a ** p`.
///
/// The exponent is not a node, so only the base receives a gradient:
/// `a.grad += p * a^(p-1) * c.grad`.
///
/// # Errors
///
/// `DomainError` when `base.value() <= 0`, the same domain as [`pow_op`].
pub fn powf_op(base: Scalar<'_>, exponent: f64) -> Result<Scalar<'_>, SgradError> {
    let x = base.value();
    if x <= 0.0 {
        return Err(SgradError::domain("powf", x));
    }
    Ok(base.graph().push(
        x.powf(exponent),
        Op::PowConst {
            base: base.id(),
            exponent,
        },
    ))
}

impl<'g> Scalar<'g> {
    /// `self ** exponent` with a node (or wrapped literal) exponent.
    /// See [`pow_op`].
    pub fn pow<R: Operand<'g>>(self, exponent: R) -> Result<Scalar<'g>, SgradError> {
        pow_op(self, exponent)
    }

    /// `self ** exponent` with a constant exponent. See [`powf_op`].
    pub fn powf(self, exponent: f64) -> Result<Scalar<'g>, SgradError> {
        powf_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
