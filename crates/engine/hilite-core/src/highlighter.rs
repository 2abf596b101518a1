//! Highlighter facade
//!
//! Ties resolver, mutator and removal together under one configuration.
//! Whether highlighting is switched on is decided by the caller; the
//! highlighter always does what it is asked.

use hilite_dom::{DomTree, NodeId, Range};

use crate::{
    apply_marker, clear_all, list_markers, remove_marker, resolve, HighlightConfig,
    MarkedContent, TextSlice,
};

#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Color used for markers created from now on
    pub fn set_color(&mut self, color: &str) {
        self.config.color = color.to_string();
    }

    /// The text slices a selection would mark
    pub fn resolve(&self, tree: &DomTree, range: &Range) -> Vec<TextSlice> {
        resolve(tree, range)
    }

    /// Mark every slice of the selection, left to right.
    ///
    /// A slice that cannot be wrapped is skipped; the others still apply.
    /// Returns the markers created, in document order.
    pub fn highlight_selection(&self, tree: &mut DomTree, range: &Range) -> Vec<NodeId> {
        let slices = resolve(tree, range);
        if slices.is_empty() {
            tracing::debug!("selection resolved to nothing");
            return Vec::new();
        }
        self.apply_slices(tree, &slices)
    }

    /// Mark already resolved slices, skipping the ones that fail
    pub fn apply_slices(&self, tree: &mut DomTree, slices: &[TextSlice]) -> Vec<NodeId> {
        let mut markers = Vec::with_capacity(slices.len());
        for slice in slices {
            match apply_marker(tree, slice, &self.config) {
                Ok(marker) => markers.push(marker),
                Err(e) => tracing::debug!("skipping slice {:?}: {}", slice, e),
            }
        }
        markers
    }

    /// Check whether a node is one of our markers
    pub fn is_marker(&self, tree: &DomTree, id: NodeId) -> bool {
        tree.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_class(&self.config.class_name))
    }

    /// Unwrap one marker. Returns false for anything that is not an
    /// attached marker.
    pub fn remove_marker(&self, tree: &mut DomTree, marker: NodeId) -> bool {
        if !self.is_marker(tree, marker) {
            return false;
        }
        let parent = tree.parent(marker);
        match remove_marker(tree, marker) {
            Ok(_) => {
                if let (true, Some(parent)) = (self.config.normalize_on_remove, parent) {
                    if let Err(e) = tree.normalize(parent) {
                        tracing::warn!("failed to normalize {}: {}", parent, e);
                    }
                }
                true
            }
            Err(e) => {
                tracing::debug!("cannot remove marker {}: {}", marker, e);
                false
            }
        }
    }

    /// Route a double-click to the marker around its target, if any.
    ///
    /// One delegated entry point replaces a listener per marker; it keeps
    /// working whether or not highlight mode is on.
    pub fn dispatch_double_click(&self, tree: &mut DomTree, target: NodeId) -> bool {
        match tree.closest_with_class(target, &self.config.class_name) {
            Some(marker) => self.remove_marker(tree, marker),
            None => false,
        }
    }

    /// Unwrap every marker in the document
    pub fn clear_all(&self, tree: &mut DomTree) -> usize {
        if !self.config.normalize_on_remove {
            return clear_all(tree, NodeId::ROOT, &self.config.class_name);
        }

        // Only the elements that held markers get their text merged.
        // Outer markers come first in tree order, so each parent read
        // here is still where the marker's content ends up.
        let mut parents: Vec<NodeId> = Vec::new();
        let mut removed = 0;
        for marker in tree.elements_with_class(NodeId::ROOT, &self.config.class_name) {
            let parent = tree.parent(marker);
            match remove_marker(tree, marker) {
                Ok(_) => {
                    removed += 1;
                    if let Some(parent) = parent.filter(|p| !parents.contains(p)) {
                        parents.push(parent);
                    }
                }
                Err(e) => tracing::debug!("skipping marker {}: {}", marker, e),
            }
        }
        for parent in parents {
            if let Err(e) = tree.normalize(parent) {
                tracing::warn!("failed to normalize {}: {}", parent, e);
            }
        }
        removed
    }

    /// Report the current markers in document order
    pub fn list_markers(&self, tree: &DomTree) -> Vec<MarkedContent> {
        list_markers(tree, NodeId::ROOT, &self.config.class_name)
    }
}
