use serde::{Deserialize, Serialize};

/// Deployment-level knobs for deserializing and serializing messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeserializeRules {
    /// Delimiters used to turn math annotations back into LaTeX source
    pub latex: LatexDelimiters,

    /// Permalink style used when generating pill links
    pub permalinks: PermalinkStyle,

    /// Always produce a formatted body, even for plain Markdown
    pub force_html: bool,
}

/// Per-call switches for deserialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// The body is a quoted excerpt: every line starts inside a block quote
    pub is_quoted_message: bool,
    /// Escape Markdown-significant characters in text runs
    pub should_escape: bool,
}

impl ParseOptions {
    pub fn quoted() -> Self {
        Self {
            is_quoted_message: true,
            ..Self::default()
        }
    }
}

/// A left/right delimiter pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    pub left: String,
    pub right: String,
}

impl DelimiterPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Wraps `tex` in this pair.
    pub fn wrap(&self, tex: &str) -> String {
        format!("{}{}{}", self.left, tex, self.right)
    }
}

/// LaTeX delimiters for inline (`span`) and display (`div`) math
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexDelimiters {
    pub inline: DelimiterPair,
    pub display: DelimiterPair,
}

impl Default for LatexDelimiters {
    fn default() -> Self {
        Self {
            inline: DelimiterPair::new("\\(", "\\)"),
            display: DelimiterPair::new("\\[", "\\]"),
        }
    }
}

/// How permalinks to users and rooms are built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermalinkStyle {
    /// `https://matrix.to/#/<entity>`
    #[default]
    MatrixTo,
    /// `<prefix>/#/user/<id>` and `<prefix>/#/room/<id>`
    Prefixed(String),
}

impl PermalinkStyle {
    /// Builds a style from a configured prefix; an empty prefix means matrix.to.
    pub fn from_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim().trim_end_matches('/');
        if prefix.is_empty() {
            PermalinkStyle::MatrixTo
        } else {
            PermalinkStyle::Prefixed(prefix.to_string())
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        match self {
            PermalinkStyle::MatrixTo => None,
            PermalinkStyle::Prefixed(prefix) => Some(prefix),
        }
    }
}
