//! Adjustment error types.

use thiserror::Error;

use crate::key::AdjustmentKind;

/// Result type for adjustment operations.
pub type AdjustResult<T> = Result<T, AdjustError>;

/// Errors that can occur while building or importing adjustment sets.
///
/// Unsupported fields are *not* an error for the lenient importer; they are
/// reported as data in [`ImportReport`](crate::ImportReport). Only the strict
/// path ([`AdjustmentSet::from_value_strict`](crate::AdjustmentSet::from_value_strict)
/// and `Deserialize`) turns them into [`AdjustError::Rejected`].
#[derive(Debug, Error)]
pub enum AdjustError {
    /// The document root is not a key/value mapping.
    #[error("adjustment document must be an object, found {0}")]
    NotAnObject(&'static str),

    /// A value was inserted under a key of a different category.
    #[error("{key} expects a {expected} value, got a {found} value")]
    ShapeMismatch {
        /// Key name.
        key: &'static str,
        /// Shape the key requires.
        expected: AdjustmentKind,
        /// Shape that was supplied.
        found: AdjustmentKind,
    },

    /// Strict import found fields it could not accept.
    #[error("rejected adjustment fields: unsupported {unsupported:?}, uncoercible {skipped:?}")]
    Rejected {
        /// Unrecognized keys.
        unsupported: Vec<String>,
        /// Recognized keys whose value could not be coerced.
        skipped: Vec<String>,
    },

    /// JSON syntax error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML syntax error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
