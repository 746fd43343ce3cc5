use super::*;
use crate::autograd::{check_grad, GradCheckError};
use crate::Graph;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), SgradError> {
    let graph = Graph::new();
    let base = graph.scalar(2.0);
    let exponent = graph.scalar(3.0);
    let c = base.pow(exponent)?;
    assert_relative_eq!(c.value(), 8.0);
    assert_eq!(
        c.op(),
        Op::Pow {
            base: base.id(),
            exponent: exponent.id()
        }
    );
    Ok(())
}

#[test]
fn test_pow_backward_both_operands() -> Result<(), SgradError> {
    let graph = Graph::new();
    let a = graph.scalar(2.0);
    let p = graph.scalar(3.0);
    let c = a.pow(p)?;
    c.backward();
    // d/da = p * a^(p-1) = 12, d/dp = a^p * ln(a) = 8 ln 2
    assert_relative_eq!(a.grad(), 12.0, epsilon = 1e-12);
    assert_relative_eq!(p.grad(), 8.0 * 2.0_f64.ln(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_literal_exponent_is_wrapped() -> Result<(), SgradError> {
    let graph = Graph::new();
    let a = graph.scalar(3.0);
    let c = a.pow(2)?;
    assert_eq!(c.value(), 9.0);
    assert_eq!(c.predecessors().len(), 2);
    assert!(c.predecessors()[1].is_leaf());
    Ok(())
}

#[test]
fn test_pow_non_positive_base_is_domain_error() {
    let graph = Graph::new();
    let base = graph.scalar(-2.0);
    let exponent = graph.scalar(3.0);
    let before = graph.len();
    let result = base.pow(exponent);
    assert!(matches!(result, Err(SgradError::DomainError { .. })));
    assert_eq!(graph.len(), before);
    assert_eq!(base.grad(), 0.0);

    let zero = graph.scalar(0.0);
    let before = graph.len();
    assert!(zero.pow(2.0).is_err());
    // The literal exponent is not wrapped when the base is rejected.
    assert_eq!(graph.len(), before);
}

#[test]
fn test_powf_forward_and_backward() -> Result<(), SgradError> {
    let graph = Graph::new();
    let x = graph.scalar(3.0);
    let y = x.powf(2.0)?;
    assert_eq!(y.value(), 9.0);
    assert_eq!(y.predecessors(), vec![x]);
    y.backward();
    assert_relative_eq!(x.grad(), 6.0);
    Ok(())
}

#[test]
fn test_powf_rejects_non_positive_base() {
    let graph = Graph::new();
    let x = graph.scalar(-2.0);
    let before = graph.len();
    match x.powf(3.0) {
        Err(SgradError::DomainError { operation, value }) => {
            assert_eq!(operation, "powf");
            assert_eq!(value, -2.0);
        }
        other => panic!("expected a domain error, got {:?}", other),
    }
    assert_eq!(graph.len(), before);
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_powf_domain_errors() {
    let graph = Graph::new();
    let neg = graph.scalar(-4.0);
    let zero = graph.scalar(0.0);
    let before = graph.len();
    assert!(matches!(neg.powf(0.5), Err(SgradError::DomainError { .. })));
    assert!(matches!(neg.powf(2.0), Err(SgradError::DomainError { .. })));
    assert!(matches!(zero.powf(-1.0), Err(SgradError::DomainError { .. })));
    assert!(matches!(zero.powf(2.0), Err(SgradError::DomainError { .. })));
    assert_eq!(graph.len(), before);
}

#[test]
fn test_pow_grad_check() -> Result<(), GradCheckError> {
    check_grad(|_g, xs| xs[0].pow(xs[1]), &[0.8, 1.7], 1e-6, 1e-4)?;
    check_grad(|_g, xs| xs[0].powf(-1.5), &[2.2], 1e-6, 1e-4)
}
