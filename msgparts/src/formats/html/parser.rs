//! HTML message deserializer
//!
//! Drives the generic walker over a detached parse of the formatted body. The
//! visitor owns the [`TraversalState`] for one call and a growing part list;
//! every entered node produces a small batch of parts that is reflowed for
//! block quotes before being appended.
//!
//! # Boundary newlines
//!
//! Block structure is reconstructed from sibling pairs: when either the
//! previously completed node or the current node is block-level, a newline is
//! emitted before the current node. `last_node` is cleared when the walker
//! descends into a container, so the first child of a block never gets a
//! leading newline, and ignored nodes never touch it.

use super::elements::{enter_element, leave_element, TraversalState};
use crate::common::classify::{is_block, is_ignored, should_descend, REPLY_FALLBACK_TAG};
use crate::common::dom::{body, is_element, parent_tag, parse_detached, text_of};
use crate::common::quote::prefix_quote_lines;
use crate::common::walker::{walk_depth_first, Descend, NodeVisitor};
use crate::parts::factory::PartFactory;
use crate::parts::Part;
use crate::rules::{DeserializeRules, ParseOptions};
use markup5ever_rcdom::{Handle, NodeData};

/// Deserializes an HTML formatted body into parts.
///
/// Never fails: unknown markup degrades to its text content.
pub fn parse_html_message(html: &str, rules: &DeserializeRules, options: ParseOptions) -> Vec<Part> {
    let dom = parse_detached(html);
    let Some(root) = body(&dom) else {
        return Vec::new();
    };
    let mut deserializer = HtmlDeserializer::new(rules, options);
    walk_depth_first(&root, &mut deserializer);
    deserializer.finish()
}

struct HtmlDeserializer<'a> {
    rules: &'a DeserializeRules,
    factory: PartFactory,
    state: TraversalState,
    parts: Vec<Part>,
}

impl<'a> HtmlDeserializer<'a> {
    fn new(rules: &'a DeserializeRules, options: ParseOptions) -> Self {
        Self {
            rules,
            factory: PartFactory::rich(options.should_escape),
            state: TraversalState::new(options.is_quoted_message),
            parts: Vec::new(),
        }
    }

    fn finish(self) -> Vec<Part> {
        self.parts
    }

    fn parse_text(&self, node: &Handle) -> Vec<Part> {
        let text = text_of(node).unwrap_or_default();
        let text = if parent_tag(node).as_deref() == Some("li") {
            text.trim_end()
        } else {
            text.as_str()
        };
        self.factory.text_with_mentions(text)
    }
}

impl NodeVisitor for HtmlDeserializer<'_> {
    fn enter(&mut self, node: &Handle) -> Descend {
        if is_ignored(node) {
            if is_element(node, REPLY_FALLBACK_TAG) {
                tracing::trace!("dropping reply fallback");
            }
            return Descend::Ignore;
        }
        if is_element(node, "blockquote") {
            self.state.in_quote = true;
        }

        let mut batch = Vec::new();
        let needs_boundary = self
            .state
            .last_node
            .as_ref()
            .is_some_and(|last| is_block(last) || is_block(node));
        if needs_boundary {
            batch.push(Part::newline());
        }

        match &node.data {
            NodeData::Text { .. } => batch.extend(self.parse_text(node)),
            NodeData::Element { .. } => {
                batch.extend(enter_element(node, &mut self.state, self.factory, self.rules))
            }
            _ => {}
        }

        if self.state.in_quote && !batch.is_empty() {
            prefix_quote_lines(&mut batch, self.parts.is_empty());
        }
        self.parts.append(&mut batch);

        let descend = should_descend(node);
        if descend {
            self.state.last_node = None;
        }
        descend.into()
    }

    fn leave(&mut self, node: &Handle) {
        leave_element(node, &mut self.state);
        self.state.last_node = Some(node.clone());
    }
}
