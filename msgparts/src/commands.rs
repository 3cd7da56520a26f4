//! Slash-command helpers over part sequences.
//!
//! Deserializing an emote or rainbow message prepends its command as a plain
//! part (see [`crate::event::SyntheticCommand`]). Before resending, the
//! composer strips it off again with these helpers.

use crate::event::SyntheticCommand;
use crate::parts::{Part, PartKind};

/// Whether the parts start with the emote command.
pub fn contains_emote(parts: &[Part]) -> bool {
    parts.first().is_some_and(|first| {
        first.kind() == PartKind::PlainText
            && first.text().starts_with(SyntheticCommand::Emote.prefix())
    })
}

/// Removes a leading emote command.
pub fn strip_emote_command(parts: &[Part]) -> Vec<Part> {
    strip_prefix(parts, SyntheticCommand::Emote.prefix())
}

/// Removes `prefix` from the start of the first part if it is plain text that
/// begins with it. A first part consisting solely of the prefix is dropped.
pub fn strip_prefix(parts: &[Part], prefix: &str) -> Vec<Part> {
    let mut stripped = parts.to_vec();
    let rest = match stripped.first() {
        Some(first) if first.kind() == PartKind::PlainText => {
            first.text().strip_prefix(prefix).map(str::to_string)
        }
        _ => None,
    };
    match rest {
        Some(rest) if rest.is_empty() => {
            stripped.remove(0);
        }
        Some(rest) => stripped[0] = Part::plain(rest),
        None => {}
    }
    stripped
}
