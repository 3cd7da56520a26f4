//! Inline formatting, text runs, emoji and unknown tags.

use crate::common::{concat, describe, html};
use insta::assert_snapshot;
use msgparts::formats::parse_html_message;
use msgparts::{DeserializeRules, ParseOptions, Part};

#[test]
fn test_inline_wrappers() {
    let parts = html(
        "<em>i</em> <strong>b</strong> <del>d</del> <sub>s</sub> <sup>p</sup> <u>u</u> <code>c</code>",
    );
    assert_eq!(
        concat(&parts),
        "_i_ **b** <del>d</del> <sub>s</sub> <sup>p</sup> <u>u</u> `c`"
    );
}

#[test]
fn test_aliases() {
    assert_eq!(
        concat(&html("<i>i</i> <b>b</b> <s>s</s> <strike>k</strike>")),
        "_i_ **b** <del>s</del> <del>k</del>"
    );
}

#[test]
fn test_nested_formatting_is_flattened() {
    let parts = html("<p>Hello <strong>bold <em>nested</em></strong> and <code>x`y</code></p>");
    assert_snapshot!(describe(&parts), @r###"
    plain-text "Hello "
    plain-text "**bold nested**"
    plain-text " and "
    plain-text "``x`y``"
    "###);
}

#[test]
fn test_emoji_are_split_out() {
    let parts = html("<p>party 🎉 time 🚀</p>");
    assert_snapshot!(describe(&parts), @r###"
    plain-text "party "
    emoji "🎉"
    plain-text " time "
    emoji "🚀"
    "###);
}

#[test]
fn test_emoji_sequences_stay_whole() {
    assert_eq!(
        html("dev 👩\u{200D}💻!"),
        vec![Part::plain("dev "), Part::emoji("👩\u{200D}💻"), Part::plain("!")]
    );
}

#[test]
fn test_image() {
    assert_eq!(
        html(r#"<img src="mxc://example.org/cat" alt="a [cat]">"#),
        vec![Part::plain(r"![a \[cat\]](mxc://example.org/cat)")]
    );
}

#[test]
fn test_image_without_attributes() {
    assert_eq!(html("<img>"), vec![Part::plain("![]()")]);
}

#[test]
fn test_unknown_inline_tags_flatten() {
    assert_eq!(
        html(r#"<font color="red">red</font> and <blink>blinking</blink>"#),
        vec![
            Part::plain("red"),
            Part::plain(" and "),
            Part::plain("blinking"),
        ]
    );
}

#[test]
fn test_at_room_in_text() {
    assert_snapshot!(describe(&html("<p>hey @room, and @room</p>")), @r###"
    plain-text "hey "
    at-room-pill
    plain-text ", and "
    at-room-pill
    "###);
}

#[test]
fn test_comments_are_dropped() {
    assert_eq!(html("a<!-- hidden -->b"), vec![Part::plain("a"), Part::plain("b")]);
}

#[test]
fn test_escaping_text_runs() {
    let options = ParseOptions {
        should_escape: true,
        ..ParseOptions::default()
    };
    let parts = parse_html_message("<p>2 * 3 = _six_</p>", &DeserializeRules::default(), options);
    assert_eq!(concat(&parts), r"2 \* 3 = \_six\_");
}

#[test]
fn test_escaping_leaves_generated_markdown_alone() {
    let options = ParseOptions {
        should_escape: true,
        ..ParseOptions::default()
    };
    let parts = parse_html_message("<em>a*b</em>", &DeserializeRules::default(), options);
    assert_eq!(concat(&parts), "_a*b_");
}
