//! Choosing between the formatted and the plain body.

use crate::common::{concat, describe, event};
use insta::assert_snapshot;
use msgparts::{parse_event, DeserializeRules, MessageContent, ParseOptions, Part};

#[test]
fn test_formatted_body_wins() {
    let content = MessageContent::html("*hi* Alice", r#"<em>hi</em> <a href="https://matrix.to/#/@alice:example.org">Alice</a>"#);
    assert_snapshot!(describe(&event(&content)), @r###"
    plain-text "_hi_"
    plain-text " "
    user-pill "Alice" @alice:example.org
    "###);
}

#[test]
fn test_plain_body_without_format() {
    let content = MessageContent::plain("line one\nline two");
    assert_eq!(concat(&event(&content)), "line one\nline two");
}

#[test]
fn test_formatted_body_without_format_is_ignored() {
    let content: MessageContent = serde_json::from_str(
        r#"{"msgtype":"m.text","body":"fallback","formatted_body":"<b>rich</b>"}"#,
    )
    .unwrap();
    assert_eq!(event(&content), vec![Part::plain("fallback")]);
}

#[test]
fn test_missing_fields_default() {
    let content: MessageContent = serde_json::from_str("{}").unwrap();
    assert!(event(&content).is_empty());
}

#[test]
fn test_quoted_event() {
    let content = MessageContent::html("a\nb", "a<br>b");
    let parts = parse_event(&content, &DeserializeRules::default(), ParseOptions::quoted());
    assert_eq!(concat(&parts), "> a\n> b");

    let content = MessageContent::plain("a\nb");
    let parts = parse_event(&content, &DeserializeRules::default(), ParseOptions::quoted());
    assert_eq!(concat(&parts), "> a\n> b");
}

#[test]
fn test_reply_fallback_is_dropped() {
    let content = MessageContent::html(
        "> <@bob:example.org> hi\n\nhello",
        "<mx-reply><blockquote>In reply to <a href=\"https://matrix.to/#/@bob:example.org\">Bob</a><br>hi</blockquote></mx-reply>hello",
    );
    assert_eq!(event(&content), vec![Part::plain("hello")]);
}
