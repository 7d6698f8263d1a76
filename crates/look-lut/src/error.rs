//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT compilation and I/O.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid LUT size.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// A grid entry holds `NaN` or an infinity and cannot be serialized.
    #[error("non-finite value {value:?} at LUT entry {index}")]
    NonFinite {
        /// Flat entry index in file order.
        index: usize,
        /// Offending sample.
        value: [f64; 3],
    },

    /// Parse error when loading LUT files.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Serialized output was not valid UTF-8.
    #[error("encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
