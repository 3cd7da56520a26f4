//! Markdown serialization (Parts → Markdown body)
//!
//! The dual of the deserializers: concatenates the serialized form of every
//! part. Pills become links built with [`make_permalink`], which the HTML
//! deserializer resolves back into the same pill once the body has been
//! rendered.

use crate::parts::factory::escape_link_text;
use crate::parts::{Part, PartKind};
use crate::permalinks::make_permalink;
use crate::rules::PermalinkStyle;

/// Serializes parts into a Markdown body.
pub fn md_serialize(parts: &[Part], permalinks: &PermalinkStyle) -> String {
    let mut body = String::new();
    for part in parts {
        match part.kind() {
            PartKind::Newline => {
                debug_assert!(part.text().is_empty(), "newline part carries text");
                body.push('\n');
            }
            PartKind::PlainText | PartKind::Emoji | PartKind::AtRoomPill | PartKind::PillCandidate => {
                body.push_str(part.text())
            }
            PartKind::UserPill => {
                let user_id = part.resource_id().unwrap_or_default();
                body.push_str(&format!(
                    "[{}]({})",
                    escape_link_text(part.text()),
                    make_permalink(user_id, permalinks)
                ));
            }
            PartKind::RoomPill => {
                // room pills render their alias or id, so that is the link text
                let room_id = part.resource_id().unwrap_or_default();
                body.push_str(&format!(
                    "[{}]({})",
                    escape_link_text(room_id),
                    make_permalink(room_id, permalinks)
                ));
            }
        }
    }
    body
}
