//! Format trait definition
//!
//! This module defines the core Format trait that all wire formats implement.
//! The trait provides a uniform interface for deserializing a message body
//! into parts and serializing parts back into a body.

use crate::error::FormatError;
use crate::parts::Part;
use crate::rules::ParseOptions;

/// Trait for message body formats
///
/// Implementors provide conversion between a body string and a part sequence.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct ShoutFormat;
///
/// impl Format for ShoutFormat {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, parts: &[Part]) -> Result<String, FormatError> {
///         Ok(parts.iter().map(|p| p.text().to_uppercase()).collect())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "markdown", "plain")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (body → parts)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (parts → body)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Deserialize a body into parts
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str, _options: ParseOptions) -> Result<Vec<Part>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize parts into a body
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _parts: &[Part]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
