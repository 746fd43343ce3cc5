use crate::error::SgradError;
use crate::graph::Graph;
use crate::scalar::Scalar;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(SgradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<SgradError> for GradCheckError {
    fn from(err: SgradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Central finite-difference estimate of the gradient of `f` at `point`.
///
/// ```
/// use sgrad_core::autograd::numerical_grad;
///
/// let f = |v: &[f64]| v[0] * v[0] + v[1] * v[1];
/// let grads = numerical_grad(f, &[3.0, 4.0], 1e-6);
/// assert!((grads[0] - 6.0).abs() < 1e-5);
/// assert!((grads[1] - 8.0).abs() < 1e-5);
/// ```
pub fn numerical_grad<F>(f: F, point: &[f64], epsilon: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut perturbed = point.to_vec();
    let mut grads = Vec::with_capacity(point.len());
    for i in 0..point.len() {
        perturbed[i] = point[i] + epsilon;
        let plus = f(&perturbed);
        perturbed[i] = point[i] - epsilon;
        let minus = f(&perturbed);
        perturbed[i] = point[i];
        grads.push((plus - minus) / (2.0 * epsilon));
    }
    grads
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives a fresh graph and one leaf per coordinate of `point` and
/// returns the output node. The analytical gradient of every leaf is
/// compared with the central difference `(f(x+ε) - f(x-ε)) / 2ε`; a
/// coordinate passes when the absolute or the relative difference is within
/// `tolerance`.
pub fn check_grad<F>(
    func: F,
    point: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Scalar<'g>]) -> Result<Scalar<'g>, SgradError>,
{
    // --- 1. Analytical gradients ---
    let analytical: Vec<f64> = {
        let graph = Graph::new();
        let inputs: Vec<Scalar<'_>> = point.iter().map(|&v| graph.scalar(v)).collect();
        let output = func(&graph, &inputs)?;
        output.backward();
        let grads = inputs.iter().map(|s| s.grad()).collect();
        grads
    };

    let evaluate = |values: &[f64]| -> Result<f64, SgradError> {
        let graph = Graph::new();
        let inputs: Vec<Scalar<'_>> = values.iter().map(|&v| graph.scalar(v)).collect();
        let output = func(&graph, &inputs)?;
        Ok(output.value())
    };

    // --- 2. Compare coordinate by coordinate ---
    let mut perturbed = point.to_vec();
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        perturbed[i] = point[i] + epsilon;
        let loss_plus = evaluate(&perturbed)?;
        perturbed[i] = point[i] - epsilon;
        let loss_minus = evaluate(&perturbed)?;
        perturbed[i] = point[i];

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }
        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
