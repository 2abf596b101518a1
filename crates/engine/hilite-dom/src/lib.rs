//! hilite DOM - Document Object Model
//!
//! Arena-based DOM tree with the pieces a text highlighter needs:
//! boundary points, ranges, text traversal and in-place mutation.

mod classlist;
mod document;
mod node;
mod operations;
mod range;
mod selection;
mod tree;
mod tree_walker;

pub use classlist::ClassList;
pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use operations::{DomError, DomResult};
pub use range::{
    compare_boundary_points, BoundaryPoint, PositionComparison, Range, RangeCompare,
};
pub use selection::{Selection, SelectionType};
pub use tree::{Children, DomTree};
pub use tree_walker::{TreeWalker, WhatToShow};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID (the document node)
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Convert the sentinel into `None`
    #[inline]
    pub fn some(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            write!(f, "#none")
        }
    }
}
