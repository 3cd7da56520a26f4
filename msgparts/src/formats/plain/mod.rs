//! Plain-text format implementation
//!
//! Used for bodies that come without a formatted counterpart. Deserialization
//! is line-oriented: the body is split on every newline variant and each line
//! becomes a run of text and room-wide mentions. Empty lines are kept, so
//! serializing the result reproduces a `\n`-terminated body exactly.

use crate::common::quote::QUOTE_PREFIX;
use crate::error::FormatError;
use crate::format::Format;
use crate::parts::factory::PartFactory;
use crate::parts::{Part, PartKind};
use crate::rules::ParseOptions;

/// Deserializes a plain body into parts.
pub fn parse_plain_message(body: &str, options: ParseOptions) -> Vec<Part> {
    let factory = if options.should_escape {
        PartFactory {
            escape_markdown: true,
            ..PartFactory::plain()
        }
    } else {
        PartFactory::plain()
    };

    let lines = split_lines(body);
    let last = lines.len().saturating_sub(1);
    let mut parts = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
        if options.is_quoted_message {
            parts.push(Part::plain(QUOTE_PREFIX));
        }
        parts.extend(factory.text_with_mentions(line));
        if i != last {
            parts.push(Part::newline());
        }
    }
    parts
}

/// Splits on `\r\n`, `\r` and `\n` without collapsing empty lines.
fn split_lines(body: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = body.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&body[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&body[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&body[start..]);
    lines
}

/// Serializes parts into a plain body: pills become their label (users) or
/// their alias or id (rooms).
pub fn text_serialize(parts: &[Part]) -> String {
    let mut body = String::new();
    for part in parts {
        match part.kind() {
            PartKind::Newline => {
                debug_assert!(part.text().is_empty(), "newline part carries text");
                body.push('\n');
            }
            PartKind::RoomPill => body.push_str(part.resource_id().unwrap_or(part.text())),
            _ => body.push_str(part.text()),
        }
    }
    body
}

/// Format implementation for plain-text bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormat;

impl Format for PlainFormat {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Plain-text message body"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
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
        Ok(text_serialize(parts))
    }
}
