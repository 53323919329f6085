//! Error types for the patchsplit CLI and library.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for patchsplit operations.
///
/// Each variant maps to a specific exit code. The parsing core itself only
/// ever surfaces `EncodingError`; the other variants belong to the CLI and
/// configuration layers.
#[derive(Error, Debug)]
pub enum SplitError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A line could not be re-encoded from its lossless representation.
    #[error("Re-encoding failed: {0}")]
    EncodingError(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SplitError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SplitError::UserError(_) => exit_codes::USER_ERROR,
            SplitError::EncodingError(_) => exit_codes::ENCODING_FAILURE,
            SplitError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for patchsplit operations.
pub type Result<T> = std::result::Result<T, SplitError>;
