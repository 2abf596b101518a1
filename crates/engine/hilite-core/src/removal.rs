//! Marker removal

use hilite_dom::{DomTree, NodeId};

use crate::HighlightError;

/// Unwrap an element: move all of its children, in order, to where it
/// stands, then drop it. Returns how many children were moved.
///
/// Makes no assumption about what the element holds, so nested markers
/// unwrap just as well as plain text.
pub fn remove_marker(tree: &mut DomTree, marker: NodeId) -> Result<usize, HighlightError> {
    let parent = tree
        .parent(marker)
        .ok_or(HighlightError::MalformedMarker(marker))?;

    let children: Vec<NodeId> = tree.children(marker).map(|(id, _)| id).collect();
    for &child in &children {
        tree.insert_before(parent, child, Some(marker))?;
    }
    tree.remove_child(parent, marker)?;

    tracing::debug!("unwrapped marker {} ({} children)", marker, children.len());
    Ok(children.len())
}

/// Unwrap every element under `root` that carries `class_name`.
/// Returns the number of markers removed.
pub fn clear_all(tree: &mut DomTree, root: NodeId, class_name: &str) -> usize {
    let markers = tree.elements_with_class(root, class_name);
    let mut removed = 0;
    for marker in markers {
        match remove_marker(tree, marker) {
            Ok(_) => removed += 1,
            Err(e) => tracing::debug!("skipping marker {}: {}", marker, e),
        }
    }
    tracing::debug!("cleared {} markers", removed);
    removed
}
