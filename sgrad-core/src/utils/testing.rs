use crate::scalar::Scalar;

/// Checks a node's value and gradient against expectations within `tolerance`.
/// Panics with the offending field on mismatch.
pub fn check_scalar_near(actual: Scalar<'_>, expected_value: f64, expected_grad: f64, tolerance: f64) {
    let value = actual.value();
    let grad = actual.grad();
    if (value - expected_value).abs() > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            value,
            expected_value,
            (value - expected_value).abs(),
            tolerance
        );
    }
    if (grad - expected_grad).abs() > tolerance {
        panic!(
            "Grad mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad,
            expected_grad,
            (grad - expected_grad).abs(),
            tolerance
        );
    }
}

/// Snapshot of the gradients of `scalars`, in order.
pub fn grads_of(scalars: &[Scalar<'_>]) -> Vec<f64> {
    scalars.iter().map(|s| s.grad()).collect()
}
