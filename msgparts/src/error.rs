//! Error types for format and part operations
//!
//! Deserialization itself never fails: malformed input degrades to plain text.
//! These errors cover format lookup, serialization and parts built from
//! untrusted data.

use crate::parts::PartKind;
use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// A part that violates the part model invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartError {
    #[error("newline part must not carry text")]
    NewlineWithText,
    #[error("{0} part requires a resource id")]
    MissingResourceId(PartKind),
    #[error("{0} part must not carry a resource id")]
    UnexpectedResourceId(PartKind),
}
