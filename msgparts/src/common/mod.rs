//! Format-agnostic machinery shared by the deserializers.
//!
//! - `dom`: helpers over the detached html5ever tree
//! - `walker`: depth-first traversal with enter/leave callbacks
//! - `classify`: ignored / block / descend predicates
//! - `quote`: block-quote line prefixing

pub mod classify;
pub mod dom;
pub mod quote;
pub mod walker;
