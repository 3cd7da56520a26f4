//! Format implementations
//!
//! This module contains the wire formats a message body can take, each able
//! to convert between a body string and a part sequence.

pub mod html;
pub mod markdown;
pub mod plain;

pub use html::{html_serialize_if_needed, parse_html_message, HtmlFormat, HTML_FORMAT_ID};
pub use markdown::{md_serialize, MarkdownFormat};
pub use plain::{parse_plain_message, text_serialize, PlainFormat};
