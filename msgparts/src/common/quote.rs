//! Block-quote reflow.
//!
//! Markdown quotes are line-based: every logical line of quoted content needs
//! its own `> ` marker. Parts are produced in small batches (one per visited
//! node), so the reflow runs on each batch as it is produced while the walker
//! is inside a quote.

use crate::parts::Part;

/// Marker prefixed to every quoted line.
pub const QUOTE_PREFIX: &str = "> ";

/// Prefixes every line that starts inside `batch` with [`QUOTE_PREFIX`].
///
/// A marker goes after every newline in the batch. When `is_document_start`
/// is set no newline precedes the batch, so the first line gets its marker up
/// front.
pub fn prefix_quote_lines(batch: &mut Vec<Part>, is_document_start: bool) {
    let mut reflowed = Vec::with_capacity(batch.len() * 2 + 1);
    if is_document_start {
        reflowed.push(Part::plain(QUOTE_PREFIX));
    }
    for part in batch.drain(..) {
        let newline = part.is_newline();
        reflowed.push(part);
        if newline {
            reflowed.push(Part::plain(QUOTE_PREFIX));
        }
    }
    *batch = reflowed;
}
