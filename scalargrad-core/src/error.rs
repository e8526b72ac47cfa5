use thiserror::Error;

/// Custom error type for the scalargrad engine and the network layer built on it.
///
/// Every variant signals a construction or usage error on the caller's side.
/// None of them is transient, so nothing in the crate retries on error.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Length mismatch during {operation}: expected {expected}, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
