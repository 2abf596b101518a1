//! Reasons a highlight step did nothing
//!
//! None of these reach the user. The highlighter logs them and moves on
//! to the next slice, leaving the tree exactly as it was for that slice.

use hilite_dom::{DomError, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    /// The slice's text node lost its parent before it could be wrapped
    #[error("text node {0} is detached")]
    DetachedNode(NodeId),

    /// Nothing but whitespace (or nothing at all) was selected
    #[error("selection is empty")]
    EmptySelection,

    /// Removal was asked for an element without a parent
    #[error("marker {0} has no parent")]
    MalformedMarker(NodeId),

    /// The slice points at something other than a text node
    #[error("node {0} is not a text node")]
    NotText(NodeId),

    /// Offsets past the text or inside a UTF-8 sequence
    #[error("slice {start}..{end} does not fit text node {node}")]
    OutOfBounds {
        node: NodeId,
        start: usize,
        end: usize,
    },

    #[error(transparent)]
    Dom(#[from] DomError),
}
