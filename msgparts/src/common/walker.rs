//! Generic depth-first traversal over a document tree.
//!
//! The walker knows nothing about messages or parts. A [`NodeVisitor`] is told
//! when a node is entered and left, and on entry decides whether the walker
//! should descend into the node's children, skip them, or ignore the node
//! altogether.
//!
//! # The Algorithm
//!
//! An explicit stack replaces recursion, so arbitrarily deep (untrusted)
//! documents cannot overflow the call stack:
//!
//! 1. Push the root's children in reverse order.
//! 2. Pop a node. If it is a pending *leave* marker, call `leave` and continue.
//! 3. Otherwise call `enter`:
//!    - [`Descend::Children`]: push a leave marker, then the children (reversed)
//!    - [`Descend::Skip`]: call `leave` immediately
//!    - [`Descend::Ignore`]: do nothing, the node is neither left nor remembered
//!
//! The root itself is never entered or left.

use markup5ever_rcdom::Handle;

/// What the walker should do after entering a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    /// Visit the node's children, then leave it
    Children,
    /// Leave the node without visiting its children
    Skip,
    /// Pretend the node does not exist
    Ignore,
}

impl From<bool> for Descend {
    fn from(descend: bool) -> Self {
        if descend {
            Descend::Children
        } else {
            Descend::Skip
        }
    }
}

pub trait NodeVisitor {
    fn enter(&mut self, node: &Handle) -> Descend;
    fn leave(&mut self, node: &Handle);
}

enum Step {
    Enter(Handle),
    Leave(Handle),
}

/// Walks every descendant of `root` depth-first.
pub fn walk_depth_first<V: NodeVisitor>(root: &Handle, visitor: &mut V) {
    let mut stack: Vec<Step> = root
        .children
        .borrow()
        .iter()
        .rev()
        .cloned()
        .map(Step::Enter)
        .collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Leave(node) => visitor.leave(&node),
            Step::Enter(node) => match visitor.enter(&node) {
                Descend::Children => {
                    stack.push(Step::Leave(node.clone()));
                    stack.extend(node.children.borrow().iter().rev().cloned().map(Step::Enter));
                }
                Descend::Skip => visitor.leave(&node),
                Descend::Ignore => {}
            },
        }
    }
}
