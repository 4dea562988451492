//! Error types for ordkv.
//!
//! Every fallible store operation returns [`Result`]. Errors are raised
//! synchronously and are never retried internally.

use thiserror::Error;

/// All ordkv errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A key argument was empty or whitespace-only
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup of a key that is not present
    #[error("key not found: {0:?}")]
    KeyNotFound(String),
}

/// Result type for ordkv operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn empty_key() -> Self {
        Error::InvalidArgument("key cannot be an empty string".to_string())
    }

    /// Check if this is an invalid-argument error.
    ///
    /// These indicate a programming error at the call site.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_))
    }
}
