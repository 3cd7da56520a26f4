//! Property tests for the plain path.

use crate::common::concat;
use msgparts::formats::{md_serialize, parse_plain_message, text_serialize};
use msgparts::rules::PermalinkStyle;
use msgparts::{ParseOptions, Part, PartKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn single_line_is_one_run(body in "[^\r\n@]{1,40}") {
        let parts = parse_plain_message(&body, ParseOptions::default());
        prop_assert_eq!(parts, vec![Part::plain(body)]);
    }

    #[test]
    fn at_room_splits_between_segments(
        segments in prop::collection::vec("[^\r\n@]{0,10}", 1..6)
    ) {
        let body = segments.join("@room");
        let parts = parse_plain_message(&body, ParseOptions::default());
        let pills = parts.iter().filter(|p| p.kind() == PartKind::AtRoomPill).count();
        prop_assert_eq!(pills, segments.len() - 1);
        prop_assert_eq!(concat(&parts), body);
    }

    #[test]
    fn plain_bodies_survive_serialization(body in "[^\r]*") {
        let parts = parse_plain_message(&body, ParseOptions::default());
        prop_assert_eq!(&text_serialize(&parts), &body);
        prop_assert_eq!(&md_serialize(&parts, &PermalinkStyle::MatrixTo), &body);
    }

    #[test]
    fn no_part_spans_a_line(body in "[a-z \n]{0,60}") {
        let parts = parse_plain_message(&body, ParseOptions::default());
        for part in &parts {
            prop_assert!(!part.text().contains('\n'));
        }
        let newlines = parts.iter().filter(|p| p.is_newline()).count();
        prop_assert_eq!(newlines, body.matches('\n').count());
    }
}
