//! Block-level structure: paragraphs, headings, rules, code blocks.

use crate::common::{concat, describe, html};
use insta::assert_snapshot;
use msgparts::formats::parse_html_message;
use msgparts::rules::DelimiterPair;
use msgparts::{DeserializeRules, ParseOptions, Part};

#[test]
fn test_heading_then_paragraph() {
    let parts = html("<h1>Title</h1><p>Body</p>");
    assert_snapshot!(describe(&parts), @r###"
    plain-text "# "
    plain-text "Title"
    newline
    newline
    plain-text "Body"
    "###);
}

#[test]
fn test_heading_levels() {
    for level in 1..=6 {
        let parts = html(&format!("<h{level}>x</h{level}>"));
        assert_eq!(parts[0], Part::plain(format!("{} ", "#".repeat(level))));
    }
}

#[test]
fn test_first_paragraph_has_no_leading_newline() {
    assert_eq!(html("<p>only</p>"), vec![Part::plain("only")]);
}

#[test]
fn test_line_breaks() {
    assert_eq!(concat(&html("a<br>b<br/>c")), "a\nb\nc");
}

#[test]
fn test_horizontal_rule_is_surrounded_by_newlines() {
    assert_eq!(concat(&html("a<hr>b")), "a\n\n---\n\nb");
}

#[test]
fn test_code_block_with_language() {
    let parts = html(r#"<pre><code class="language-rust">fn x(){}</code></pre>"#);
    assert_eq!(concat(&parts), "```rust\nfn x(){}\n```");
}

#[test]
fn test_code_block_lines_are_addressable() {
    let parts = html("<pre><code>let a = 1;\nlet b = 2;\n</code></pre>");
    assert_snapshot!(describe(&parts), @r###"
    plain-text "```"
    newline
    plain-text "let a = 1;"
    newline
    plain-text "let b = 2;"
    newline
    plain-text "```"
    "###);
}

#[test]
fn test_code_block_content_is_not_walked() {
    let parts = html("<pre><code>&lt;b&gt;not bold&lt;/b&gt; @room</code></pre>");
    assert_eq!(concat(&parts), "```\n<b>not bold</b> @room\n```");
}

#[test]
fn test_code_block_after_paragraph() {
    let parts = html("<p>look:</p><pre><code>x</code></pre>");
    assert_eq!(concat(&parts), "look:\n```\nx\n```");
}

#[test]
fn test_table_cells_become_lines() {
    let parts = html("<table><tr><td>a</td><td>b</td></tr></table>");
    assert_eq!(concat(&parts), "a\nb");
}

#[test]
fn test_divs_are_walked() {
    assert_eq!(concat(&html("<div>one</div><div>two</div>")), "one\ntwo");
}

#[test]
fn test_math_annotations() {
    let parts = html(
        r#"<p>inline <span data-mx-maths="a^2">a²</span></p><div data-mx-maths="\int f">∫f</div>"#,
    );
    assert_eq!(concat(&parts), "inline \\(a^2\\)\n\\[\\int f\\]");
}

#[test]
fn test_math_delimiters_are_configurable() {
    let mut rules = DeserializeRules::default();
    rules.latex.inline = DelimiterPair::new("$", "$");
    rules.latex.display = DelimiterPair::new("$$", "$$");
    let parts = parse_html_message(
        r#"<span data-mx-maths="a">a</span> <div data-mx-maths="b">b</div>"#,
        &rules,
        ParseOptions::default(),
    );
    assert_eq!(concat(&parts), "$a$ $$b$$");
}

#[test]
fn test_pretty_printed_document() {
    let parts = html("<h2>Plan</h2>\n<p>first</p>\n<p>second</p>\n");
    assert_eq!(concat(&parts), "## Plan\n\nfirst\n\nsecond");
}
