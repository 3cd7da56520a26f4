//! HTML format implementation
//!
//! This module converts formatted message bodies (`org.matrix.custom.html`)
//! into parts, and parts back into formatted bodies.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for parsing:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Bodies come from other users and are untrusted. The parser builds an inert
//! tree and nothing more; see [`crate::common::dom`].
//!
//! Serialization goes through Markdown and `comrak`, the same renderer used
//! for composing new messages, so an edited message renders exactly like a
//! freshly typed one.
//!
//! # Lossy Conversions
//!
//! - Nested inline formatting collapses to the outermost wrapper
//! - Tables lose their grid: every cell becomes its own line
//! - Nested ordered lists keep independent counters, which Markdown renders
//!   as best it can
//!
//! The per-tag mapping table lives in the `elements` module.

mod elements;
mod parser;
mod serializer;

pub use parser::parse_html_message;
pub use serializer::html_serialize_if_needed;

use crate::error::FormatError;
use crate::format::Format;
use crate::parts::Part;
use crate::rules::{DeserializeRules, ParseOptions};

/// The `format` value announcing an HTML formatted body.
pub const HTML_FORMAT_ID: &str = "org.matrix.custom.html";

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    rules: DeserializeRules,
}

impl HtmlFormat {
    pub fn new(rules: DeserializeRules) -> Self {
        Self { rules }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Formatted message body (HTML subset)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, options: ParseOptions) -> Result<Vec<Part>, FormatError> {
        Ok(parse_html_message(source, &self.rules, options))
    }

    fn serialize(&self, parts: &[Part]) -> Result<String, FormatError> {
        let rules = DeserializeRules {
            force_html: true,
            ..self.rules.clone()
        };
        html_serialize_if_needed(parts, &rules)?
            .ok_or_else(|| FormatError::SerializationError("no HTML produced".to_string()))
    }
}
