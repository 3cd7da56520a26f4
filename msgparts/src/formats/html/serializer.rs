//! HTML serialization (Parts → formatted body)
//!
//! Pipeline: Parts → Markdown body → comrak AST → HTML string
//!
//! A formatted body is only worth sending when the Markdown actually formats
//! something. A body whose AST holds nothing but paragraphs, text and breaks
//! is sent as plain text alone.

use crate::error::FormatError;
use crate::formats::markdown::md_serialize;
use crate::parts::Part;
use crate::rules::DeserializeRules;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{format_html, parse_document, Arena, ComrakOptions};

/// Renders `parts` to HTML, or `None` when the body is plain text and
/// `rules.force_html` is off.
pub fn html_serialize_if_needed(
    parts: &[Part],
    rules: &DeserializeRules,
) -> Result<Option<String>, FormatError> {
    let markdown = md_serialize(parts, &rules.permalinks);
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, &markdown, &options);

    if !rules.force_html && is_plain_text(root) {
        return Ok(None);
    }

    let mut output = Vec::new();
    format_html(root, &options, &mut output)
        .map_err(|e| FormatError::SerializationError(format!("HTML rendering failed: {e}")))?;
    let html = String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("Invalid UTF-8 in output: {e}")))?;

    // comrak writes "<br />\n" for hard breaks; the extra newline would be
    // rendered twice by clients that honour whitespace
    let mut html = html.replace("<br />\n", "<br />").trim_end().to_string();
    if is_single_paragraph(root) {
        html = unwrap_paragraph(&html).to_string();
    }
    Ok(Some(html))
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.strikethrough = true;
    // pills, <del>, <u> and friends are raw inline HTML in the body
    options.render.unsafe_ = true;
    options.render.hardbreaks = true;
    options
}

fn is_plain_text<'a>(root: &'a AstNode<'a>) -> bool {
    root.descendants().all(|node| {
        matches!(
            node.data.borrow().value,
            NodeValue::Document
                | NodeValue::Paragraph
                | NodeValue::Text(_)
                | NodeValue::SoftBreak
                | NodeValue::LineBreak
        )
    })
}

fn is_single_paragraph<'a>(root: &'a AstNode<'a>) -> bool {
    let mut children = root.children();
    match (children.next(), children.next()) {
        (Some(only), None) => matches!(only.data.borrow().value, NodeValue::Paragraph),
        _ => false,
    }
}

fn unwrap_paragraph(html: &str) -> &str {
    html.strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
        .unwrap_or(html)
}
