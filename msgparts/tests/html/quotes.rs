//! Block quotes and quoted messages.

use crate::common::{concat, describe, html};
use insta::assert_snapshot;
use msgparts::formats::parse_html_message;
use msgparts::{DeserializeRules, ParseOptions};

#[test]
fn test_blockquote_reflow() {
    let parts = html("<blockquote>line1<br>line2</blockquote>");
    assert_eq!(concat(&parts), "> line1\n> line2");
    assert_snapshot!(describe(&parts), @r###"
    plain-text "> "
    plain-text "line1"
    newline
    plain-text "> "
    plain-text "line2"
    "###);
}

#[test]
fn test_blockquote_with_paragraphs() {
    let parts = html("<blockquote><p>a</p><p>b</p></blockquote><p>c</p>");
    assert_eq!(concat(&parts), "> a\n> \n> b\n\nc");
}

#[test]
fn test_blockquote_after_content() {
    let parts = html("<p>intro</p><blockquote>q</blockquote>");
    assert_eq!(concat(&parts), "intro\n> q");
}

#[test]
fn test_content_outside_quote_is_not_prefixed() {
    let parts = html("before<blockquote>in</blockquote>after");
    assert_eq!(concat(&parts), "before\n> in\nafter");
}

#[test]
fn test_reply_fallback_is_ignored() {
    let parts = html(
        "<mx-reply><blockquote><a href=\"https://matrix.to/#/!r:example.org/$e\">In reply to</a> original</blockquote></mx-reply>the reply",
    );
    assert_eq!(concat(&parts), "the reply");
}

#[test]
fn test_quoted_message() {
    let parts = parse_html_message(
        "<p>a</p><p>b</p>",
        &DeserializeRules::default(),
        ParseOptions::quoted(),
    );
    assert_eq!(concat(&parts), "> a\n> \n> b");
}
