//! Node mutator
//!
//! Wraps one text slice in a marker element. The parent's text content
//! and document order are unchanged afterwards; only the marker element
//! is added around the selected characters.

use hilite_dom::{DomTree, NodeId};

use crate::config::MARKER_ATTRIBUTE;
use crate::{HighlightConfig, HighlightError, TextSlice};

/// Create a detached, empty marker element
fn create_marker(tree: &mut DomTree, config: &HighlightConfig) -> NodeId {
    let marker = tree.create_element(&config.tag);
    if let Some(elem) = tree.get_mut(marker).and_then(|n| n.as_element_mut()) {
        elem.add_class(&config.class_name);
        elem.set_style_property("background-color", &config.color);
        elem.set_style_property("cursor", &config.cursor);
        elem.set_attr(MARKER_ATTRIBUTE, "true");
    }
    marker
}

/// Wrap the slice's characters in a new marker and return it.
///
/// When the slice covers the whole text node, that node itself is moved
/// into the marker so outside references to it stay valid. Otherwise the
/// node is replaced by up to three siblings: leading text, the marker
/// holding a copy of the selected text, and trailing text.
pub fn apply_marker(
    tree: &mut DomTree,
    slice: &TextSlice,
    config: &HighlightConfig,
) -> Result<NodeId, HighlightError> {
    let node = slice.node;
    let parent = tree
        .parent(node)
        .ok_or(HighlightError::DetachedNode(node))?;
    let text = tree
        .text(node)
        .ok_or(HighlightError::NotText(node))?
        .to_string();
    let (Some(before), Some(selected), Some(after)) = (
        text.get(..slice.start),
        text.get(slice.start..slice.end),
        text.get(slice.end..),
    ) else {
        return Err(HighlightError::OutOfBounds {
            node,
            start: slice.start,
            end: slice.end,
        });
    };
    if selected.trim().is_empty() {
        return Err(HighlightError::EmptySelection);
    }

    let marker = create_marker(tree, config);

    if before.is_empty() && after.is_empty() {
        tree.insert_before(parent, marker, Some(node))?;
        tree.append_child(marker, node)?;
    } else {
        if !before.is_empty() {
            let leading = tree.create_text(before);
            tree.insert_before(parent, leading, Some(node))?;
        }

        let inner = tree.create_text(selected);
        tree.append_child(marker, inner)?;
        tree.insert_before(parent, marker, Some(node))?;

        if !after.is_empty() {
            let trailing = tree.create_text(after);
            tree.insert_before(parent, trailing, Some(node))?;
        }

        tree.remove_child(parent, node)?;
    }

    tracing::debug!(
        "marked {:?} ({}..{}) of {} as {}",
        selected,
        slice.start,
        slice.end,
        node,
        marker
    );
    Ok(marker)
}
