//! Synthetic slash commands and their removal.

use crate::common::{concat, event};
use msgparts::commands::{contains_emote, strip_emote_command, strip_prefix};
use msgparts::event::EMOTE_MSGTYPE;
use msgparts::rainbow::text_to_html_rainbow;
use msgparts::{MessageContent, Part, SyntheticCommand};

#[test]
fn test_plain_emote() {
    let content = MessageContent::plain("waves").with_msgtype(EMOTE_MSGTYPE);
    let parts = event(&content);
    assert_eq!(parts, vec![Part::plain("/me "), Part::plain("waves")]);
    assert!(contains_emote(&parts));
    assert_eq!(strip_emote_command(&parts), vec![Part::plain("waves")]);
}

#[test]
fn test_formatted_emote() {
    let content = MessageContent::html("**waves**", "<strong>waves</strong>").with_msgtype(EMOTE_MSGTYPE);
    assert_eq!(concat(&event(&content)), "/me **waves**");
}

#[test]
fn test_rainbow() {
    let body = "so pretty";
    let content = MessageContent::html(body, text_to_html_rainbow(body));
    let parts = event(&content);
    assert_eq!(concat(&parts), "/rainbow so pretty");

    let stripped = strip_prefix(&parts, SyntheticCommand::Rainbow.prefix());
    assert_eq!(concat(&stripped), body);
}

#[test]
fn test_rainbow_emote() {
    let body = "dances";
    let content = MessageContent::html(body, text_to_html_rainbow(body)).with_msgtype(EMOTE_MSGTYPE);
    let parts = event(&content);
    assert_eq!(parts[0], Part::plain("/rainbowme "));
    assert!(!contains_emote(&parts));
}

#[test]
fn test_near_rainbow_is_not_rainbow() {
    let content = MessageContent::html("abc", text_to_html_rainbow("abd"));
    assert_eq!(concat(&event(&content)), "abd");
}

#[test]
fn test_ordinary_text_has_no_command() {
    let parts = event(&MessageContent::plain("/me is not an emote here"));
    assert_eq!(parts, vec![Part::plain("/me is not an emote here")]);
}

#[test]
fn test_rainbow_with_combining_marks_and_flags() {
    let body = "cafe\u{301} \u{1F1EB}\u{1F1F7}";
    let content = MessageContent::html(body, text_to_html_rainbow(body));
    assert_eq!(concat(&event(&content)), format!("/rainbow {body}"));
}
