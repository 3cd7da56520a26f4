//! Helpers over the `markup5ever_rcdom` tree.
//!
//! Incoming formatted bodies are untrusted. They are parsed with `html5ever`
//! into an `RcDom`, a plain reference-counted tree: there is no script engine,
//! no style engine and no rendering surface behind it, so nothing in the
//! source can execute or load resources. Keep it that way; never hand these
//! trees to anything that renders or evaluates them.

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parses `html` into a detached document tree.
pub fn parse_detached(html: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(html)
}

/// The `<body>` element of a parsed document, if any.
pub fn body(dom: &RcDom) -> Option<Handle> {
    let mut stack = vec![dom.document.clone()];
    while let Some(node) = stack.pop() {
        if tag_name(&node) == Some("body") {
            return Some(node);
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    None
}

/// Lowercase local name of an element node.
pub fn tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub fn is_element(node: &Handle, tag: &str) -> bool {
    tag_name(node) == Some(tag)
}

/// Contents of a text node.
pub fn text_of(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(String::from(&**contents.borrow())),
        _ => None,
    }
}

pub fn attribute(node: &Handle, attr: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == attr)
            .map(|a| String::from(&*a.value)),
        _ => None,
    }
}

pub fn has_attribute(node: &Handle, attr: &str) -> bool {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs.borrow().iter().any(|a| &*a.name.local == attr),
        _ => false,
    }
}

pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take()?;
    let parent = weak.upgrade();
    node.parent.set(Some(weak));
    parent
}

pub fn parent_tag(node: &Handle) -> Option<String> {
    parent(node).and_then(|p| tag_name(&p).map(str::to_string))
}

/// First child that is an element.
pub fn first_element_child(node: &Handle) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|c| matches!(c.data, NodeData::Element { .. }))
        .cloned()
}

/// Concatenated text of all descendant text nodes, in document order.
///
/// Comments and other non-text nodes contribute nothing.
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![node.clone()];
    while let Some(current) = stack.pop() {
        if let NodeData::Text { contents } = &current.data {
            text.push_str(&contents.borrow());
        }
        stack.extend(current.children.borrow().iter().rev().cloned());
    }
    text
}

/// Whether every child of `node` is a text node.
pub fn has_only_text_children(node: &Handle) -> bool {
    node.children
        .borrow()
        .iter()
        .all(|c| matches!(c.data, NodeData::Text { .. }))
}
