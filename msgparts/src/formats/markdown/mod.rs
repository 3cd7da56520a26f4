//! Markdown format implementation
//!
//! Outgoing message bodies are Markdown. Reading one back is line-oriented
//! just like a plain body, since the editor works on the Markdown source and
//! never on its rendering; only serialization differs, turning pills into
//! permalink links instead of bare labels.
//!
//! # Element Mapping Table
//!
//! | Part         | Markdown                               |
//! |--------------|----------------------------------------|
//! | plain, emoji | literal text                           |
//! | newline      | `\n`                                   |
//! | at-room pill | `@room`                                |
//! | user pill    | `[label](permalink)`                   |
//! | room pill    | `[alias or id](permalink)`             |

mod serializer;

pub use serializer::md_serialize;

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::plain::parse_plain_message;
use crate::parts::Part;
use crate::rules::{ParseOptions, PermalinkStyle};

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    permalinks: PermalinkStyle,
}

impl MarkdownFormat {
    pub fn new(permalinks: PermalinkStyle) -> Self {
        Self { permalinks }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown message body"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, options: ParseOptions) -> Result<Vec<Part>, FormatError> {
        Ok(parse_plain_message(source, options))
    }

    fn serialize(&self, parts: &[Part]) -> Result<String, FormatError> {
        Ok(md_serialize(parts, &self.permalinks))
    }
}
