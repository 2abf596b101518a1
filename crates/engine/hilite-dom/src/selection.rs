//! Selection - the user's current text selection

use crate::{DomTree, NodeId, Range};

/// What `Selection.type` reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionType {
    #[default]
    None,
    Caret,
    Range,
}

/// The user's selection: zero or one range, like every browser ships it
#[derive(Debug, Clone, Default)]
pub struct Selection {
    range: Option<Range>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection holding one range
    pub fn from_range(range: Range) -> Self {
        Self { range: Some(range) }
    }

    /// Get the number of ranges
    pub fn range_count(&self) -> usize {
        usize::from(self.range.is_some())
    }

    /// Get a range by index
    pub fn get_range_at(&self, index: usize) -> Option<&Range> {
        self.range.as_ref().filter(|_| index == 0)
    }

    /// Empty or caret-only
    pub fn is_collapsed(&self) -> bool {
        self.range.as_ref().is_none_or(Range::collapsed)
    }

    pub fn selection_type(&self) -> SelectionType {
        match &self.range {
            None => SelectionType::None,
            Some(r) if r.collapsed() => SelectionType::Caret,
            Some(_) => SelectionType::Range,
        }
    }

    /// Replace the selection with a range
    pub fn add_range(&mut self, range: Range) {
        self.range = Some(range);
    }

    /// Drop every range, leaving nothing selected
    pub fn remove_all_ranges(&mut self) {
        self.range = None;
    }

    /// Collapse the selection to a point
    pub fn collapse(&mut self, node: NodeId, offset: usize) {
        self.range = Some(Range::new(node, offset));
    }

    /// Selected text
    pub fn to_string(&self, tree: &DomTree) -> String {
        self.range
            .as_ref()
            .map(|r| r.to_string(tree))
            .unwrap_or_default()
    }
}
