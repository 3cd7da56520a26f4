//! Event-level assembly.
//!
//! [`parse_event`] is the entry point for turning a received message into
//! editable parts. It picks the HTML path when the content carries a
//! formatted body in a recognised format and the plain path otherwise, then
//! prepends the slash command the sender must have typed, which is implied by
//! the message metadata rather than present in the text.
//!
//! # Command detection
//!
//! - emote: `msgtype` is `m.emote`
//! - rainbow: the formatted body equals [`text_to_html_rainbow`] of the plain
//!   body. This is a heuristic: nothing records that `/rainbow` was used, so a
//!   formatted body that happens to match is taken as a rainbow message.

use crate::formats::html::{parse_html_message, HTML_FORMAT_ID};
use crate::formats::plain::parse_plain_message;
use crate::parts::Part;
use crate::rainbow::text_to_html_rainbow;
use crate::rules::{DeserializeRules, ParseOptions};
use serde::{Deserialize, Serialize};

/// `msgtype` of emote messages.
pub const EMOTE_MSGTYPE: &str = "m.emote";

/// The content of a received message event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent {
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msgtype: Option<String>,
}

impl MessageContent {
    pub fn plain(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn html(body: impl Into<String>, formatted_body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            formatted_body: Some(formatted_body.into()),
            format: Some(HTML_FORMAT_ID.to_string()),
            msgtype: None,
        }
    }

    pub fn with_msgtype(mut self, msgtype: impl Into<String>) -> Self {
        self.msgtype = Some(msgtype.into());
        self
    }

    /// The formatted body, if it is in a format the HTML path understands.
    pub fn html_body(&self) -> Option<&str> {
        match (&self.format, &self.formatted_body) {
            (Some(format), Some(formatted)) if format == HTML_FORMAT_ID => Some(formatted.as_str()),
            _ => None,
        }
    }

    pub fn is_emote(&self) -> bool {
        self.msgtype.as_deref() == Some(EMOTE_MSGTYPE)
    }

    /// Whether the formatted body is exactly the rainbow transform of the body.
    pub fn is_rainbow(&self) -> bool {
        match self.html_body() {
            Some(formatted) if !self.body.is_empty() => {
                text_to_html_rainbow(&self.body) == formatted
            }
            _ => false,
        }
    }
}

/// A slash command implied by message metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticCommand {
    Emote,
    Rainbow,
    RainbowEmote,
}

impl SyntheticCommand {
    pub fn detect(emote: bool, rainbow: bool) -> Option<Self> {
        match (emote, rainbow) {
            (true, true) => Some(SyntheticCommand::RainbowEmote),
            (false, true) => Some(SyntheticCommand::Rainbow),
            (true, false) => Some(SyntheticCommand::Emote),
            (false, false) => None,
        }
    }

    /// The command text, including its trailing space.
    pub fn prefix(self) -> &'static str {
        match self {
            SyntheticCommand::Emote => "/me ",
            SyntheticCommand::Rainbow => "/rainbow ",
            SyntheticCommand::RainbowEmote => "/rainbowme ",
        }
    }
}

/// Deserializes a received message into parts.
pub fn parse_event(
    content: &MessageContent,
    rules: &DeserializeRules,
    options: ParseOptions,
) -> Vec<Part> {
    let mut parts = match content.html_body() {
        Some(html) => {
            tracing::debug!("deserializing formatted body");
            parse_html_message(html, rules, options)
        }
        None => {
            tracing::debug!(format = ?content.format, "deserializing plain body");
            parse_plain_message(&content.body, options)
        }
    };

    if let Some(command) = SyntheticCommand::detect(content.is_emote(), content.is_rainbow()) {
        tracing::debug!(?command, "prepending synthetic command");
        parts.insert(0, Part::plain(command.prefix()));
    }
    parts
}
