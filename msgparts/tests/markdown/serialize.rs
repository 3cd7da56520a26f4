//! Markdown and HTML serialization of parts.

use msgparts::formats::{html_serialize_if_needed, md_serialize};
use msgparts::rules::PermalinkStyle;
use msgparts::{DeserializeRules, Part};

#[test]
fn test_pills_become_links() {
    let parts = vec![
        Part::plain("ask "),
        Part::user_pill("Alice", "@alice:example.org"),
        Part::plain(" in "),
        Part::room_pill("Rust chat", "#rust:example.org"),
    ];
    assert_eq!(
        md_serialize(&parts, &PermalinkStyle::MatrixTo),
        "ask [Alice](https://matrix.to/#/@alice:example.org) in [#rust:example.org](https://matrix.to/#/#rust:example.org)"
    );
}

#[test]
fn test_prefixed_permalinks() {
    let style = PermalinkStyle::from_prefix("https://chat.example.org/");
    let parts = vec![
        Part::user_pill("Bob", "@bob:example.org"),
        Part::room_pill("!abc:example.org", "!abc:example.org"),
    ];
    assert_eq!(
        md_serialize(&parts, &style),
        "[Bob](https://chat.example.org/#/user/@bob:example.org)[!abc:example.org](https://chat.example.org/#/room/!abc:example.org)"
    );
}

#[test]
fn test_plain_text_sends_no_html() {
    let parts = vec![Part::plain("hello"), Part::newline(), Part::at_room_pill()];
    let html = html_serialize_if_needed(&parts, &DeserializeRules::default()).unwrap();
    assert_eq!(html, None);
}

#[test]
fn test_formatting_sends_html() {
    let parts = vec![Part::plain("~~gone~~ and `code`")];
    let html = html_serialize_if_needed(&parts, &DeserializeRules::default()).unwrap();
    assert_eq!(html.as_deref(), Some("<del>gone</del> and <code>code</code>"));
}

#[test]
fn test_lists_keep_their_block_markup() {
    let parts = vec![
        Part::plain("- a"),
        Part::newline(),
        Part::plain("- b"),
    ];
    let html = html_serialize_if_needed(&parts, &DeserializeRules::default())
        .unwrap()
        .unwrap();
    assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
}
