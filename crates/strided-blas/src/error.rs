//! Error types for Level-1 operations.

use thiserror::Error;

/// Errors that can occur when dispatching or running a Level-1 kernel.
///
/// Every check behind these errors runs before the first element is
/// touched, so a call that returns an error has not mutated its operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlasError {
    /// Zero-length vector or tensor, zero stride, short buffer, or an
    /// out-of-range column/row index.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Two tensor operands are incompatible under the broadcast rule.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// `b*c - a*s` was not zero in a rotation-parameter call.
    #[error("Invalid rotation input: {0}")]
    InvalidRotationInput(String),
}

/// Result type for Level-1 operations.
pub type Result<T> = std::result::Result<T, BlasError>;
