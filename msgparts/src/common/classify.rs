//! Node classification predicates.
//!
//! Three questions are asked of every node during deserialization:
//! should it be ignored entirely, is it block-level, and should traversal
//! descend into it. Anything that cannot be classified is treated as inline.

use super::dom::{has_attribute, tag_name, text_of};
use markup5ever_rcdom::{Handle, NodeData};

/// Wrapper element carrying the fallback quotation of a replied-to message.
pub const REPLY_FALLBACK_TAG: &str = "mx-reply";

/// Attribute marking an element as rendered LaTeX; the value is the source.
pub const MATHS_ATTRIBUTE: &str = "data-mx-maths";

const BLOCK_TAGS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "li",
    "blockquote",
    "pre",
    "hr",
    "div",
    "table",
    "thead",
    "tbody",
    "tfoot",
    "tr",
    "th",
    "td",
];

/// Pretty-printing artifacts (a text node that is exactly one newline), the
/// reply fallback wrapper, and every node that is neither text nor element.
pub fn is_ignored(node: &Handle) -> bool {
    match &node.data {
        NodeData::Text { .. } => text_of(node).as_deref() == Some("\n"),
        NodeData::Element { .. } => tag_name(node) == Some(REPLY_FALLBACK_TAG),
        _ => true,
    }
}

pub fn is_block(node: &Handle) -> bool {
    match tag_name(node) {
        // math is rendered inline in the editor even when the source used a div
        Some("div") => !has_attribute(node, MATHS_ATTRIBUTE),
        Some(tag) => BLOCK_TAGS.contains(&tag),
        None => false,
    }
}

/// Code blocks are captured verbatim and inline elements are flattened into
/// text by the element deserializer, so only the remaining block containers
/// are walked.
pub fn should_descend(node: &Handle) -> bool {
    match tag_name(node) {
        Some("pre") => false,
        _ => is_block(node),
    }
}
