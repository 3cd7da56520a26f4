//! Ordered and unordered lists.

use crate::common::{concat, describe, html};
use insta::assert_snapshot;

#[test]
fn test_ordered_list_start() {
    let parts = html(r#"<ol start="3"><li>a</li><li>b</li></ol>"#);
    assert_snapshot!(describe(&parts), @r###"
    plain-text "3. "
    plain-text "a"
    newline
    plain-text "4. "
    plain-text "b"
    "###);
}

#[test]
fn test_ordered_list_defaults_to_one() {
    assert_eq!(concat(&html("<ol><li>a</li><li>b</li></ol>")), "1. a\n2. b");
    assert_eq!(
        concat(&html(r#"<ol start="many"><li>a</li></ol>"#)),
        "1. a"
    );
}

#[test]
fn test_nested_unordered_list_indentation() {
    let parts = html("<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>");
    assert_snapshot!(describe(&parts), @r###"
    plain-text "- "
    plain-text "a"
    newline
    plain-text "    - "
    plain-text "b"
    newline
    plain-text "- "
    plain-text "c"
    "###);
}

#[test]
fn test_nested_ordered_lists_keep_their_own_counters() {
    let parts = html("<ol><li>a<ol><li>b</li><li>c</li></ol></li><li>d</li></ol>");
    assert_eq!(concat(&parts), "1. a\n    1. b\n    2. c\n2. d");
}

#[test]
fn test_mixed_nesting() {
    let parts = html("<ol><li>a<ul><li>b</li></ul></li><li>c</li></ol>");
    assert_eq!(concat(&parts), "1. a\n    - b\n2. c");
}

#[test]
fn test_tight_list_with_paragraphs() {
    let parts = html("<ul><li><p>a</p></li><li><p>b</p></li></ul>");
    assert_eq!(concat(&parts), "- a\n- b");
}

#[test]
fn test_pretty_printed_list() {
    let parts = html("<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
    assert_eq!(concat(&parts), "- a\n- b");
}

#[test]
fn test_list_item_trailing_whitespace_is_trimmed() {
    assert_eq!(concat(&html("<ul><li>a   </li></ul>")), "- a");
}

#[test]
fn test_list_after_paragraph() {
    assert_eq!(concat(&html("<p>todo:</p><ul><li>x</li></ul>")), "todo:\n- x");
}

#[test]
fn test_list_item_with_several_paragraphs() {
    let parts = html("<ul><li><p>a</p><p>b</p></li><li><p>c</p></li></ul>");
    assert_eq!(concat(&parts), "- a\n\nb\n- c");
}

#[test]
fn test_out_of_range_start_degrades_to_one() {
    let parts = html(r#"<ol start="9223372036854775807"><li>a</li><li>b</li></ol>"#);
    assert_eq!(concat(&parts), "1. a\n2. b");
    let parts = html(r#"<ol start="-99999999999"><li>a</li></ol>"#);
    assert_eq!(concat(&parts), "1. a");
}

#[test]
fn test_negative_and_large_starts_in_range() {
    assert_eq!(
        concat(&html(r#"<ol start="-2"><li>a</li><li>b</li></ol>"#)),
        "-2. a\n-1. b"
    );
    assert_eq!(
        concat(&html(r#"<ol start="2147483647"><li>a</li><li>b</li></ol>"#)),
        "2147483647. a\n2147483648. b"
    );
}
