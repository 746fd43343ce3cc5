use crate::error::SgradError;
use crate::scalar::Scalar;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module composes scalar operations into a forward function over a slice
/// of input nodes and exposes its trainable parameters as a flat list of
/// nodes. All parameters of a module live in the same [`Graph`](crate::Graph)
/// as the nodes it produces.
pub trait Module<'g>: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` when `input` does not have the width the
    /// module was built for.
    fn forward(&self, input: &[Scalar<'g>]) -> Result<Vec<Scalar<'g>>, SgradError>;

    /// Returns all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Scalar<'g>>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. `"0.1.w2"` for weight 2 of neuron 1 of layer 0).
    fn named_parameters(&self) -> Vec<(String, Scalar<'g>)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}

/// Checks that `input` has `expected` entries.
pub(crate) fn check_width(expected: usize, input: &[Scalar<'_>], operation: &str) -> Result<(), SgradError> {
    if input.len() != expected {
        return Err(SgradError::ShapeMismatch {
            expected,
            actual: input.len(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}
