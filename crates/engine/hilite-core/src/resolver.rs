//! Range resolver
//!
//! Maps a selection range onto the text nodes it covers. Read-only: the
//! tree is walked, never touched.

use hilite_dom::{DomTree, NodeId, PositionComparison, Range, TreeWalker};

/// The part of one text node that falls inside a selection.
///
/// Offsets are byte offsets into the node's text, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSlice {
    pub node: NodeId,
    pub start: usize,
    pub end: usize,
}

impl TextSlice {
    pub fn new(node: NodeId, start: usize, end: usize) -> Self {
        Self { node, start, end }
    }

    /// The selected substring, if the slice still fits its node
    pub fn text<'a>(&self, tree: &'a DomTree) -> Option<&'a str> {
        tree.text(self.node)?.get(self.start..self.end)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Resolve a selection into text slices, in document order.
///
/// Whitespace-only text nodes never produce a slice, and a range whose
/// text trims to nothing resolves to an empty list.
pub fn resolve(tree: &DomTree, range: &Range) -> Vec<TextSlice> {
    if range.collapsed() || is_blank(&range.to_string(tree)) {
        return Vec::new();
    }

    let start_container = range.start_container();
    let end_container = range.end_container();

    if start_container == end_container && tree.is_text(start_container) {
        return vec![TextSlice::new(
            start_container,
            range.start_offset(),
            range.end_offset(),
        )];
    }

    let Some(ancestor) = range.common_ancestor_container(tree) else {
        return Vec::new();
    };
    let root = if tree.is_text(ancestor) {
        match tree.parent(ancestor) {
            Some(parent) => parent,
            None => return Vec::new(),
        }
    } else {
        ancestor
    };

    let mut slices = Vec::new();
    for node in TreeWalker::texts(root).iter(tree) {
        let Some(text) = tree.text(node) else {
            continue;
        };
        if is_blank(text) || !range.intersects_node_contents(tree, node) {
            continue;
        }

        let start = if node == start_container {
            range.start_offset()
        } else if range.compare_point(tree, node, 0) == PositionComparison::Before {
            continue;
        } else {
            0
        };

        let end = if node == end_container {
            range.end_offset()
        } else if range.compare_point(tree, node, text.len()) == PositionComparison::After {
            continue;
        } else {
            text.len()
        };

        if start < end && text.get(start..end).is_some_and(|s| !is_blank(s)) {
            slices.push(TextSlice::new(node, start, end));
        }
    }

    tracing::trace!("resolved {} slices under {}", slices.len(), root);
    slices
}
