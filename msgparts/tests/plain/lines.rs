//! Line splitting, quoting and escaping on the plain path.

use crate::common::{concat, describe};
use insta::assert_snapshot;
use msgparts::formats::{parse_plain_message, text_serialize};
use msgparts::{ParseOptions, Part};

fn plain(body: &str) -> Vec<Part> {
    parse_plain_message(body, ParseOptions::default())
}

#[test]
fn test_single_line() {
    assert_eq!(plain("hello world"), vec![Part::plain("hello world")]);
}

#[test]
fn test_every_newline_variant_splits() {
    assert_snapshot!(describe(&plain("a\r\nb\rc\nd")), @r###"
    plain-text "a"
    newline
    plain-text "b"
    newline
    plain-text "c"
    newline
    plain-text "d"
    "###);
}

#[test]
fn test_empty_lines_are_kept() {
    assert_eq!(
        plain("a\n\nb\n"),
        vec![
            Part::plain("a"),
            Part::newline(),
            Part::newline(),
            Part::plain("b"),
            Part::newline(),
        ]
    );
}

#[test]
fn test_empty_body() {
    assert!(plain("").is_empty());
}

#[test]
fn test_markup_is_not_interpreted() {
    assert_eq!(plain("<b>not bold</b>"), vec![Part::plain("<b>not bold</b>")]);
}

#[test]
fn test_emoji_stay_inside_the_run() {
    assert_eq!(plain("ship it 🚀"), vec![Part::plain("ship it 🚀")]);
}

#[test]
fn test_at_room() {
    assert_snapshot!(describe(&plain("@room: deploy at 5")), @r###"
    at-room-pill
    plain-text ": deploy at 5"
    "###);
}

#[test]
fn test_quoted_message_prefixes_every_line() {
    let parts = parse_plain_message("first\n\nsecond", ParseOptions::quoted());
    assert_eq!(concat(&parts), "> first\n> \n> second");
}

#[test]
fn test_escaping() {
    let options = ParseOptions {
        should_escape: true,
        ..ParseOptions::default()
    };
    let parts = parse_plain_message("> not a quote *really*", options);
    assert_eq!(concat(&parts), r"\> not a quote \*really\*");
}

#[test]
fn test_text_serialize_renders_room_ids() {
    let parts = vec![
        Part::user_pill("Alice", "@alice:example.org"),
        Part::plain(" joined "),
        Part::room_pill("Rust", "#rust:example.org"),
        Part::newline(),
        Part::at_room_pill(),
    ];
    assert_eq!(text_serialize(&parts), "Alice joined #rust:example.org\n@room");
}
