//! Per-tag transformation of HTML elements into parts.
//!
//! Every element is first classified into an [`ElementKind`]; the kind decides
//! which parts the element produces on entry. Unknown tags map to
//! [`ElementKind::Other`], which either lets the walker descend (block
//! containers) or flattens the element to its text content.
//!
//! # Element Mapping Table
//!
//! | HTML                              | Parts                                         | Notes                                   |
//! |-----------------------------------|-----------------------------------------------|-----------------------------------------|
//! | `h1`..`h6`                        | `"## "`                                       | level from the tag digit, text walked   |
//! | `a` (user permalink)              | user pill                                     | label = visible text                    |
//! | `a` (room permalink)              | room pill                                     | label = visible text                    |
//! | `a` (text == href)                | plain                                         | undecorated autolink                    |
//! | `a` (other)                       | `[text](href)`                                | `[`, `]`, `\` escaped in text           |
//! | `img`                             | `![alt](src)`                                 | same escaping on alt                    |
//! | `br`                              | newline                                       |                                         |
//! | `hr`                              | newline, `---`, newline                       |                                         |
//! | `em` `strong` `del` `sub` ...     | `_x_` `**x**` `<del>x</del>` ...              | flattened text, nesting is lost         |
//! | `pre`                             | fenced code block, one part per line          | `language-*` class on the inner `code`  |
//! | `code`                            | `` `x` ``                                     | longer fence when x contains backticks  |
//! | `li`                              | `"1. "` / `"- "`, indented 4 per level        |                                         |
//! | `p`                               | newline, unless first in its container        | keeps tight list items tight            |
//! | `span`/`div` with `data-mx-maths` | `\(tex\)` / `\[tex\]`                         | delimiters configurable                 |
//! | `ol` / `ul`                       | nothing                                       | push/pop numbering and depth            |
//! | anything else                     | flattened text, or nothing if walked into     |                                         |

use crate::common::classify::{should_descend, MATHS_ATTRIBUTE};
use crate::common::dom::{
    attribute, first_element_child, has_attribute, has_only_text_children, is_element,
    parent_tag, tag_name, text_content,
};
use crate::parts::factory::{escape_link_text, PartFactory};
use crate::parts::Part;
use crate::permalinks::{resolve_permalink, PermalinkEntity};
use crate::rules::DeserializeRules;
use markup5ever_rcdom::Handle;

const LIST_INDENT: usize = 4;
const LANGUAGE_CLASS_PREFIX: &str = "language-";
/// `language-_*` classes are internal bookkeeping, never a real language.
const PRIVATE_LANGUAGE_PREFIX: &str = "language-_";

/// Mutable state threaded through one deserialization call.
pub struct TraversalState {
    /// One counter per open ordered list, innermost last
    pub list_index: Vec<i64>,
    /// Number of open `ol`/`ul` ancestors
    pub list_depth: usize,
    pub in_quote: bool,
    /// The most recently completed node; `None` right after entering a container
    pub last_node: Option<Handle>,
}

impl TraversalState {
    pub fn new(in_quote: bool) -> Self {
        Self {
            list_index: Vec::new(),
            list_depth: 0,
            in_quote,
            last_node: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Italic,
    Bold,
    Strikethrough,
    Subscript,
    Superscript,
    Underline,
}

impl Emphasis {
    fn wrap(self, text: &str) -> String {
        match self {
            Emphasis::Italic => format!("_{text}_"),
            Emphasis::Bold => format!("**{text}**"),
            Emphasis::Strikethrough => format!("<del>{text}</del>"),
            Emphasis::Subscript => format!("<sub>{text}</sub>"),
            Emphasis::Superscript => format!("<sup>{text}</sup>"),
            Emphasis::Underline => format!("<u>{text}</u>"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading(usize),
    Anchor,
    Image,
    LineBreak,
    Rule,
    Emphasis(Emphasis),
    CodeBlock,
    InlineCode,
    ListItem,
    Paragraph,
    InlineMath,
    DisplayMath,
    OrderedList,
    UnorderedList,
    BlockQuote,
    Other,
}

impl ElementKind {
    pub fn of(node: &Handle) -> Self {
        let Some(tag) = tag_name(node) else {
            return ElementKind::Other;
        };
        match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                ElementKind::Heading(tag[1..].parse().unwrap_or(1))
            }
            "a" => ElementKind::Anchor,
            "img" => ElementKind::Image,
            "br" => ElementKind::LineBreak,
            "hr" => ElementKind::Rule,
            "em" | "i" => ElementKind::Emphasis(Emphasis::Italic),
            "strong" | "b" => ElementKind::Emphasis(Emphasis::Bold),
            "del" | "s" | "strike" => ElementKind::Emphasis(Emphasis::Strikethrough),
            "sub" => ElementKind::Emphasis(Emphasis::Subscript),
            "sup" => ElementKind::Emphasis(Emphasis::Superscript),
            "u" => ElementKind::Emphasis(Emphasis::Underline),
            "pre" => ElementKind::CodeBlock,
            "code" => ElementKind::InlineCode,
            "li" => ElementKind::ListItem,
            "p" => ElementKind::Paragraph,
            "span" if has_attribute(node, MATHS_ATTRIBUTE) => ElementKind::InlineMath,
            "div" if has_attribute(node, MATHS_ATTRIBUTE) => ElementKind::DisplayMath,
            "ol" => ElementKind::OrderedList,
            "ul" => ElementKind::UnorderedList,
            "blockquote" => ElementKind::BlockQuote,
            _ => ElementKind::Other,
        }
    }
}

/// Produces the parts for entering `node`.
pub fn enter_element(
    node: &Handle,
    state: &mut TraversalState,
    factory: PartFactory,
    rules: &DeserializeRules,
) -> Vec<Part> {
    let markdown = factory.without_escaping();
    match ElementKind::of(node) {
        ElementKind::Heading(level) => vec![Part::plain(format!("{} ", "#".repeat(level)))],
        ElementKind::Anchor => parse_anchor(node, factory, rules),
        ElementKind::Image => {
            let alt = attribute(node, "alt").unwrap_or_default();
            let src = attribute(node, "src").unwrap_or_default();
            markdown.plain_with_emoji(&format!("![{}]({src})", escape_link_text(&alt)))
        }
        ElementKind::LineBreak => vec![Part::newline()],
        // the newline after the rule keeps the next line from turning `---`
        // into a setext heading underline
        ElementKind::Rule => vec![Part::newline(), Part::plain("---"), Part::newline()],
        ElementKind::Emphasis(emphasis) => {
            markdown.plain_with_emoji(&emphasis.wrap(&text_content(node)))
        }
        ElementKind::CodeBlock => parse_code_block(node, markdown),
        ElementKind::InlineCode => {
            let code = text_content(node);
            let fence = "`".repeat(longest_backtick_run(&code) + 1);
            markdown.plain_with_emoji(&format!("{fence}{code}{fence}"))
        }
        ElementKind::ListItem => vec![list_item_marker(node, state)],
        ElementKind::Paragraph => {
            if state.last_node.is_some() {
                vec![Part::newline()]
            } else {
                Vec::new()
            }
        }
        ElementKind::InlineMath => {
            let tex = attribute(node, MATHS_ATTRIBUTE).unwrap_or_default();
            markdown.plain_with_emoji(&rules.latex.inline.wrap(&tex))
        }
        ElementKind::DisplayMath => {
            let tex = attribute(node, MATHS_ATTRIBUTE).unwrap_or_default();
            markdown.plain_with_emoji(&rules.latex.display.wrap(&tex))
        }
        ElementKind::OrderedList => {
            // `start` is a 32-bit integer; anything else falls back to 1
            let start = attribute(node, "start")
                .and_then(|s| s.trim().parse::<i32>().ok())
                .unwrap_or(1);
            state.list_index.push(i64::from(start));
            state.list_depth += 1;
            Vec::new()
        }
        ElementKind::UnorderedList => {
            state.list_depth += 1;
            Vec::new()
        }
        ElementKind::BlockQuote => Vec::new(),
        ElementKind::Other => {
            if should_descend(node) {
                Vec::new()
            } else {
                tracing::debug!(tag = tag_name(node), "flattening element to text");
                factory.text_with_mentions(&text_content(node))
            }
        }
    }
}

/// Undoes the structural effects of [`enter_element`] once `node` is done.
pub fn leave_element(node: &Handle, state: &mut TraversalState) {
    match ElementKind::of(node) {
        ElementKind::BlockQuote => state.in_quote = false,
        ElementKind::OrderedList => {
            state.list_index.pop();
            state.list_depth = state.list_depth.saturating_sub(1);
        }
        ElementKind::UnorderedList => {
            state.list_depth = state.list_depth.saturating_sub(1);
        }
        _ => {}
    }
}

fn parse_anchor(node: &Handle, factory: PartFactory, rules: &DeserializeRules) -> Vec<Part> {
    let href = attribute(node, "href").unwrap_or_default();
    let text = text_content(node);

    match resolve_permalink(&href, &rules.permalinks) {
        Some(PermalinkEntity::User(user_id)) => {
            let label = if text.trim().is_empty() { user_id.clone() } else { text };
            vec![Part::user_pill(label, user_id)]
        }
        Some(PermalinkEntity::Room(room_id)) => {
            let label = if text.trim().is_empty() { room_id.clone() } else { text };
            vec![Part::room_pill(label, room_id)]
        }
        None if href.is_empty() => factory.text_with_mentions(&text),
        None if href == text && has_only_text_children(node) => {
            factory.without_escaping().text_with_mentions(&text)
        }
        None => factory
            .without_escaping()
            .text_with_mentions(&format!("[{}]({href})", escape_link_text(&text))),
    }
}

fn parse_code_block(node: &Handle, factory: PartFactory) -> Vec<Part> {
    let language = first_element_child(node)
        .filter(|child| is_element(child, "code"))
        .and_then(|code| code_language(&code))
        .unwrap_or_default();

    let content = text_content(node);
    let content = content.strip_suffix('\n').unwrap_or(&content);
    let fence = "`".repeat((longest_backtick_run(content) + 1).max(3));

    let mut parts = factory.plain_with_emoji(&format!("{fence}{language}"));
    parts.push(Part::newline());
    for line in content.split('\n') {
        parts.extend(factory.plain_with_emoji(line));
        parts.push(Part::newline());
    }
    parts.push(Part::plain(fence));
    parts
}

fn code_language(code: &Handle) -> Option<String> {
    let classes = attribute(code, "class")?;
    classes
        .split_whitespace()
        .find(|class| {
            class.starts_with(LANGUAGE_CLASS_PREFIX) && !class.starts_with(PRIVATE_LANGUAGE_PREFIX)
        })
        .map(|class| class[LANGUAGE_CLASS_PREFIX.len()..].to_string())
}

/// The marker for a list item. Nested ordered lists keep their own counters,
/// which Markdown itself cannot express; the output is best effort.
fn list_item_marker(node: &Handle, state: &mut TraversalState) -> Part {
    let indent = " ".repeat(LIST_INDENT * state.list_depth.saturating_sub(1));
    if parent_tag(node).as_deref() == Some("ol") {
        let index = match state.list_index.last_mut() {
            Some(counter) => {
                let index = *counter;
                *counter = counter.saturating_add(1);
                index
            }
            None => 1,
        };
        Part::plain(format!("{indent}{index}. "))
    } else {
        Part::plain(format!("{indent}- "))
    }
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
