//! Permalink parsing and generation.
//!
//! A permalink is a URL that unambiguously identifies a user or a room. The
//! element deserializer resolves anchors through [`resolve_permalink`] to decide
//! whether a link becomes a pill; the serializers build links with
//! [`make_permalink`] so that the round trip resolves back to the same pill.
//!
//! Recognised forms:
//!
//! | Form                                           | Example                                   |
//! |------------------------------------------------|-------------------------------------------|
//! | matrix.to                                      | `https://matrix.to/#/@alice:example.org`  |
//! | matrix.to event link (resolves to the room)    | `https://matrix.to/#/!abc:example.org/$ev`|
//! | prefixed web client link                       | `https://chat.example.org/#/room/#a:b`    |
//! | `matrix:` URI                                  | `matrix:u/alice:example.org`              |

use crate::rules::PermalinkStyle;
use percent_encoding::percent_decode_str;
use url::Url;

const MATRIX_TO_HOST: &str = "matrix.to";
const MATRIX_TO_BASE: &str = "https://matrix.to";

/// The entity a permalink points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermalinkEntity {
    /// A user id, `@user:server`
    User(String),
    /// A room id (`!id:server`) or alias (`#alias:server`)
    Room(String),
}

impl PermalinkEntity {
    pub fn id(&self) -> &str {
        match self {
            PermalinkEntity::User(id) | PermalinkEntity::Room(id) => id,
        }
    }

    /// Classifies a bare entity id by its sigil.
    pub fn from_id(id: &str) -> Option<Self> {
        let mut chars = id.chars();
        let sigil = chars.next()?;
        if chars.as_str().is_empty() {
            return None;
        }
        match sigil {
            '@' => Some(PermalinkEntity::User(id.to_string())),
            '#' | '!' => Some(PermalinkEntity::Room(id.to_string())),
            _ => None,
        }
    }
}

/// Resolves `href` to the user or room it identifies, if it is a permalink.
pub fn resolve_permalink(href: &str, style: &PermalinkStyle) -> Option<PermalinkEntity> {
    let url = Url::parse(href.trim()).ok()?;
    let entity = match url.scheme() {
        "matrix" => parse_matrix_uri(url.path()),
        "http" | "https" => {
            if url.host_str() == Some(MATRIX_TO_HOST) {
                parse_matrix_to_fragment(url.fragment()?)
            } else if is_prefixed_link(href, style) {
                parse_prefixed_fragment(url.fragment()?)
            } else {
                None
            }
        }
        _ => None,
    };
    tracing::trace!(href, ?entity, "resolved permalink");
    entity
}

/// Builds a permalink for a user id, room id or room alias.
pub fn make_permalink(entity_id: &str, style: &PermalinkStyle) -> String {
    match style {
        PermalinkStyle::MatrixTo => format!("{MATRIX_TO_BASE}/#/{entity_id}"),
        PermalinkStyle::Prefixed(prefix) => {
            if entity_id.starts_with('@') {
                format!("{prefix}/#/user/{entity_id}")
            } else {
                format!("{prefix}/#/room/{entity_id}")
            }
        }
    }
}

fn is_prefixed_link(href: &str, style: &PermalinkStyle) -> bool {
    match style.prefix() {
        Some(prefix) => href.starts_with(prefix),
        None => false,
    }
}

/// `/<entity>[/<event>][?via=...]`
fn parse_matrix_to_fragment(fragment: &str) -> Option<PermalinkEntity> {
    let mut segments = fragment_segments(fragment);
    let entity = decode(segments.next()?);
    PermalinkEntity::from_id(&entity)
}

/// `/user/<id>` or `/room/<id>[/<event>]`
fn parse_prefixed_fragment(fragment: &str) -> Option<PermalinkEntity> {
    let mut segments = fragment_segments(fragment);
    let kind = segments.next()?;
    let entity = decode(segments.next()?);
    match (kind, PermalinkEntity::from_id(&entity)?) {
        ("user", user @ PermalinkEntity::User(_)) => Some(user),
        ("room", room @ PermalinkEntity::Room(_)) => Some(room),
        _ => None,
    }
}

/// `u/<user>`, `r/<alias>`, `roomid/<id>[/e/<event>]`
fn parse_matrix_uri(path: &str) -> Option<PermalinkEntity> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let sigil = match segments.next()? {
        "u" | "user" => '@',
        "r" | "room" => '#',
        "roomid" => '!',
        _ => return None,
    };
    let localpart = decode(segments.next()?);
    PermalinkEntity::from_id(&format!("{sigil}{localpart}"))
}

fn fragment_segments(fragment: &str) -> impl Iterator<Item = &str> {
    let path = fragment.split('?').next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty())
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
