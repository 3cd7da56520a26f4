//! The Part model: typed fragments of editable message content.
//!
//! A message, once deserialized, is an ordered `Vec<Part>`. Every other module
//! in the crate either produces parts (the html and plain deserializers) or
//! consumes them (the serializers). Reading the parts in order and
//! concatenating their serialized forms reproduces an editable document.
//!
//! # Invariants
//!
//! - A [`PartKind::Newline`] part never carries text.
//! - Pills ([`PartKind::UserPill`], [`PartKind::RoomPill`]) always carry a
//!   resource id; every other kind never does.
//!
//! Both invariants are enforced by the constructors. Parts built from untrusted
//! data (serde) go through [`RawPart`] and are validated, see [`PartError`].

pub mod emoji;
pub mod factory;

use crate::error::PartError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The literal token for a room-wide mention.
pub const AT_ROOM: &str = "@room";

/// The kind of a [`Part`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    PlainText,
    Newline,
    /// A single emoji grapheme, split out of plain text on the rich path.
    Emoji,
    UserPill,
    RoomPill,
    /// Room-wide mention (`@room`).
    AtRoomPill,
    /// Editor-only: text being typed that may become a pill. Never produced
    /// by deserialization.
    PillCandidate,
}

impl PartKind {
    pub fn is_pill(self) -> bool {
        matches!(
            self,
            PartKind::UserPill | PartKind::RoomPill | PartKind::AtRoomPill
        )
    }

    fn requires_resource_id(self) -> bool {
        matches!(self, PartKind::UserPill | PartKind::RoomPill)
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartKind::PlainText => "plain-text",
            PartKind::Newline => "newline",
            PartKind::Emoji => "emoji",
            PartKind::UserPill => "user-pill",
            PartKind::RoomPill => "room-pill",
            PartKind::AtRoomPill => "at-room-pill",
            PartKind::PillCandidate => "pill-candidate",
        };
        f.write_str(name)
    }
}

/// An atomic, typed fragment of editable message content.
///
/// Parts are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPart", into = "RawPart")]
pub struct Part {
    kind: PartKind,
    text: String,
    resource_id: Option<String>,
}

impl Part {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::unchecked(PartKind::PlainText, text.into(), None)
    }

    pub fn newline() -> Self {
        Self::unchecked(PartKind::Newline, String::new(), None)
    }

    pub fn emoji(text: impl Into<String>) -> Self {
        Self::unchecked(PartKind::Emoji, text.into(), None)
    }

    /// A user pill with a display label and the canonical user id (`@user:server`).
    pub fn user_pill(label: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::unchecked(PartKind::UserPill, label.into(), Some(user_id.into()))
    }

    /// A room pill with a display label and a room id or alias.
    pub fn room_pill(label: impl Into<String>, room_id_or_alias: impl Into<String>) -> Self {
        Self::unchecked(
            PartKind::RoomPill,
            label.into(),
            Some(room_id_or_alias.into()),
        )
    }

    pub fn at_room_pill() -> Self {
        Self::unchecked(PartKind::AtRoomPill, AT_ROOM.to_string(), None)
    }

    pub fn pill_candidate(text: impl Into<String>) -> Self {
        Self::unchecked(PartKind::PillCandidate, text.into(), None)
    }

    fn unchecked(kind: PartKind, text: String, resource_id: Option<String>) -> Self {
        Self {
            kind,
            text,
            resource_id,
        }
    }

    pub fn kind(&self) -> PartKind {
        self.kind
    }

    /// The display string. Empty for newlines.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The user id or room id/alias a pill refers to.
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    pub fn is_newline(&self) -> bool {
        self.kind == PartKind::Newline
    }

    /// Whether this part carries literal text that can be merged with a
    /// neighbouring part of the same kind.
    pub fn is_text_run(&self) -> bool {
        self.kind == PartKind::PlainText
    }
}

/// Unvalidated wire shape of a [`Part`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPart {
    pub kind: PartKind,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl TryFrom<RawPart> for Part {
    type Error = PartError;

    fn try_from(raw: RawPart) -> Result<Self, Self::Error> {
        if raw.kind == PartKind::Newline && !raw.text.is_empty() {
            return Err(PartError::NewlineWithText);
        }
        match (raw.kind.requires_resource_id(), raw.resource_id.is_some()) {
            (true, false) => return Err(PartError::MissingResourceId(raw.kind)),
            (false, true) => return Err(PartError::UnexpectedResourceId(raw.kind)),
            _ => {}
        }
        if raw.kind == PartKind::AtRoomPill {
            return Ok(Part::at_room_pill());
        }
        Ok(Part::unchecked(raw.kind, raw.text, raw.resource_id))
    }
}

impl From<Part> for RawPart {
    fn from(part: Part) -> Self {
        RawPart {
            kind: part.kind,
            text: part.text,
            resource_id: part.resource_id,
        }
    }
}

/// Merges adjacent plain text runs.
///
/// Deserializers emit one part per source fragment; editors usually prefer the
/// fewest parts possible. Pills, emoji and newlines are left untouched.
pub fn merge_text_runs(parts: Vec<Part>) -> Vec<Part> {
    let mut merged: Vec<Part> = Vec::with_capacity(parts.len());
    for part in parts {
        match merged.last_mut() {
            Some(last) if last.is_text_run() && part.is_text_run() => {
                last.text.push_str(&part.text);
            }
            _ => merged.push(part),
        }
    }
    merged
}
