//! Cloning error types.

use thiserror::Error;

/// Errors raised while deep-cloning a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloneError {
    /// The value's runtime kind is not cloneable (functions, symbols).
    ///
    /// Raised at the first unsupported node encountered during traversal;
    /// the whole clone is abandoned. Retrying with the same input always
    /// reproduces the failure, so callers should pre-filter their input or
    /// treat this as fatal.
    #[error("cannot clone {0}")]
    UnsupportedType(&'static str),
}

/// Result type for clone operations.
pub type CloneResult<T> = std::result::Result<T, CloneError>;
