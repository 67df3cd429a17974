//! Error types for ID generation, parsing, and validation.

use thiserror::Error;

/// Errors that can occur when generating or parsing IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID is missing the underscore separator.
    #[error("ID missing underscore separator")]
    MissingSeparator,

    /// The requested kind or prefix is not in the registry.
    #[error("unknown prefix kind: '{0}'")]
    UnknownPrefixKind(String),

    /// The ID carries a prefix for a different kind than expected.
    #[error("invalid ID prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        expected: &'static str,
        actual: String,
    },

    /// The encoded payload contains a character outside the base58 alphabet.
    #[error("invalid base58 character: '{character}'")]
    InvalidCharacter { character: char },

    /// The decoded payload is not the expected number of bytes.
    #[error("invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl IdError {
    /// Returns true if this error indicates an unknown kind or prefix.
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, IdError::UnknownPrefixKind(_))
    }

    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            IdError::UnknownPrefixKind(_) | IdError::InvalidPrefix { .. }
        )
    }
}
