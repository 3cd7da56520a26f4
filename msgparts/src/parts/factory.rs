//! Normalizes raw strings into parts.
//!
//! Two splitters live here: one on emoji grapheme boundaries, one on the
//! literal room-wide mention token. Deserializers combine them with
//! [`PartFactory::text_with_mentions`].

use super::emoji::is_emoji_grapheme;
use super::{Part, AT_ROOM};
use unicode_segmentation::UnicodeSegmentation;

/// How plain runs are produced by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartFactory {
    /// Split emoji graphemes out of plain runs into [`Part::emoji`] parts.
    pub split_emoji: bool,
    /// Escape Markdown-significant characters in text runs.
    pub escape_markdown: bool,
}

impl PartFactory {
    /// Factory used on the rich (HTML) path.
    pub fn rich(escape_markdown: bool) -> Self {
        Self {
            split_emoji: true,
            escape_markdown,
        }
    }

    /// Factory used on the plain-text path: one plain run per segment.
    pub fn plain() -> Self {
        Self::default()
    }

    /// The same factory with Markdown escaping turned off, for text that is
    /// already Markdown syntax.
    pub fn without_escaping(self) -> Self {
        Self {
            escape_markdown: false,
            ..self
        }
    }

    /// Produces plain parts for `text`, split on emoji boundaries when enabled.
    ///
    /// Empty input produces no parts.
    pub fn plain_with_emoji(&self, text: &str) -> Vec<Part> {
        if text.is_empty() {
            return Vec::new();
        }
        if !self.split_emoji {
            return vec![Part::plain(text)];
        }
        split_emoji(text)
    }

    /// Splits `text` on the room-wide mention token into alternating plain
    /// runs and at-room pills.
    pub fn text_with_mentions(&self, text: &str) -> Vec<Part> {
        // escaping never touches `@room`, and a leading `>` is only a quote
        // marker at the start of the text or of a line, not of a segment
        let escaped;
        let text = if self.escape_markdown {
            escaped = escape_markdown(text);
            escaped.as_str()
        } else {
            text
        };
        let mut parts = Vec::new();
        let mut segments = text.split(AT_ROOM).peekable();
        while let Some(segment) = segments.next() {
            parts.extend(self.plain_with_emoji(segment));
            // split() yields a trailing empty segment when text ends with the
            // token, so a pill goes between every pair of segments
            if segments.peek().is_some() {
                parts.push(Part::at_room_pill());
            }
        }
        parts
    }
}

fn split_emoji(text: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut run = String::new();
    for grapheme in text.graphemes(true) {
        if is_emoji_grapheme(grapheme) {
            if !run.is_empty() {
                parts.push(Part::plain(std::mem::take(&mut run)));
            }
            parts.push(Part::emoji(grapheme));
        } else {
            run.push_str(grapheme);
        }
    }
    if !run.is_empty() {
        parts.push(Part::plain(run));
    }
    parts
}

/// Escapes `[`, `]` and backslash, the characters that would otherwise break
/// Markdown link text.
pub fn escape_link_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes characters Markdown would interpret as formatting, plus a `>` at
/// the start of the text or of any line in it.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut line_start = true;
    for c in text.chars() {
        let special = matches!(c, '\\' | '*' | '_' | '[' | ']' | '`' | '<') || (line_start && c == '>');
        if special {
            escaped.push('\\');
        }
        escaped.push(c);
        line_start = c == '\n';
    }
    escaped
}
