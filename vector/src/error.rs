use std::{error::Error, fmt};

/// The vector module's result type.
pub type Result<T> = std::result::Result<T, VectorErr>;

/// Failures produced while dispatching or evaluating a vector operation.
///
/// The variants carry context for diagnostics, while the `Display` output is the
/// exact message reported back to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorErr {
    /// The requested operation name is not registered.
    UnsupportedOperation(String),

    /// The operands of a binary operation have different lengths.
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}

impl fmt::Display for VectorErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorErr::UnsupportedOperation(_) => f.write_str("operation is not supported"),
            VectorErr::LengthMismatch { .. } => f.write_str("vectors are different length"),
        }
    }
}

impl Error for VectorErr {}
