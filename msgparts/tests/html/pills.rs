//! Links, permalinks and pills.

use crate::common::{describe, html};
use insta::assert_snapshot;
use msgparts::formats::parse_html_message;
use msgparts::rules::PermalinkStyle;
use msgparts::{DeserializeRules, ParseOptions, Part};

#[test]
fn test_user_and_room_pills() {
    let parts = html(concat!(
        r#"<a href="https://matrix.to/#/@alice:example.org">Alice</a>: see "#,
        r#"<a href="https://matrix.to/#/%23rust:example.org">#rust:example.org</a>"#,
    ));
    assert_snapshot!(describe(&parts), @r###"
    user-pill "Alice" @alice:example.org
    plain-text ": see "
    room-pill "#rust:example.org" #rust:example.org
    "###);
}

#[test]
fn test_room_id_and_event_links_become_room_pills() {
    assert_eq!(
        html(r#"<a href="https://matrix.to/#/!abc:example.org/$event?via=example.org">here</a>"#),
        vec![Part::room_pill("here", "!abc:example.org")]
    );
}

#[test]
fn test_matrix_uri() {
    assert_eq!(
        html(r#"<a href="matrix:u/bob:example.org">Bob</a>"#),
        vec![Part::user_pill("Bob", "@bob:example.org")]
    );
}

#[test]
fn test_empty_pill_label_falls_back_to_id() {
    assert_eq!(
        html(r#"<a href="https://matrix.to/#/@alice:example.org"></a>"#),
        vec![Part::user_pill("@alice:example.org", "@alice:example.org")]
    );
}

#[test]
fn test_prefixed_permalinks() {
    let rules = DeserializeRules {
        permalinks: PermalinkStyle::from_prefix("https://chat.example.org"),
        ..DeserializeRules::default()
    };
    let parts = parse_html_message(
        r#"<a href="https://chat.example.org/#/room/#rust:example.org">Rust</a>"#,
        &rules,
        ParseOptions::default(),
    );
    assert_eq!(parts, vec![Part::room_pill("Rust", "#rust:example.org")]);
}

#[test]
fn test_autolink_stays_plain() {
    assert_eq!(
        html(r#"<a href="https://example.org/a_b">https://example.org/a_b</a>"#),
        vec![Part::plain("https://example.org/a_b")]
    );
}

#[test]
fn test_autolink_shortcut_needs_text_children() {
    assert_eq!(
        html(r#"<a href="https://example.org"><em>https://example.org</em></a>"#),
        vec![Part::plain("[https://example.org](https://example.org)")]
    );
}

#[test]
fn test_link_text_is_escaped() {
    assert_eq!(
        html(r#"<a href="https://example.org">see [1] \o/</a>"#),
        vec![Part::plain(r"[see \[1\] \\o/](https://example.org)")]
    );
}

#[test]
fn test_links_inside_text() {
    let parts = html(r#"<p>read <a href="https://example.org">the docs</a> first</p>"#);
    assert_snapshot!(describe(&parts), @r###"
    plain-text "read "
    plain-text "[the docs](https://example.org)"
    plain-text " first"
    "###);
}
