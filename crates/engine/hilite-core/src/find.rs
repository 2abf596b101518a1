//! Text search across node boundaries (like `window.find`)
//!
//! Builds the range a user would get by dragging over the first
//! occurrence of a string, even when it spans several text nodes.

use hilite_dom::{DomTree, NodeId, Range, TreeWalker};

/// Range over the first occurrence of `needle` in the text under `root`.
///
/// The end of a match that lands exactly between two text nodes is placed
/// at the end of the earlier one.
pub fn find_text(tree: &DomTree, root: NodeId, needle: &str) -> Option<Range> {
    find_text_nth(tree, root, needle, 0)
}

/// Like [`find_text`], for the `nth` (0-based) non-overlapping occurrence
pub fn find_text_nth(tree: &DomTree, root: NodeId, needle: &str, nth: usize) -> Option<Range> {
    if needle.is_empty() {
        return None;
    }

    // (text node, byte offset of its first character in `flat`)
    let mut spans = Vec::new();
    let mut flat = String::new();
    for node in TreeWalker::texts(root).iter(tree) {
        spans.push((node, flat.len()));
        flat.push_str(tree.text(node).unwrap_or_default());
    }

    let (found, _) = flat.match_indices(needle).nth(nth)?;
    let (start_node, start_base) = locate(&spans, found, false)?;
    let (end_node, end_base) = locate(&spans, found + needle.len(), true)?;
    Some(Range::between(
        start_node,
        found - start_base,
        end_node,
        found + needle.len() - end_base,
    ))
}

// A start offset belongs to the node it begins; an end offset to the node
// it closes.
fn locate(spans: &[(NodeId, usize)], offset: usize, is_end: bool) -> Option<(NodeId, usize)> {
    let index = if is_end {
        spans.iter().rposition(|&(_, base)| base < offset)?
    } else {
        spans.iter().rposition(|&(_, base)| base <= offset)?
    };
    Some(spans[index])
}
