use thiserror::Error;

/// Custom error type for the sgrad engine and its `nn` layer.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum SgradError {
    /// The operand lies outside the domain where the operation (or its local
    /// derivative) is a finite real number.
    #[error("Domain error in {operation}: operand value {value} is outside the supported domain")]
    DomainError { operation: String, value: f64 },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Unknown activation label: {0:?}")]
    UnknownActivation(String),

    #[error("Invalid parameter initialization: {0}")]
    InvalidInitialization(String),
}

impl SgradError {
    pub(crate) fn domain(operation: &str, value: f64) -> Self {
        SgradError::DomainError {
            operation: operation.to_string(),
            value,
        }
    }
}
