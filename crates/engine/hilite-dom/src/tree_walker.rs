//! Filtered pre-order walks
//!
//! A [`TreeWalker`] yields the descendants of a root in document order,
//! keeping only the node kinds its [`WhatToShow`] mask lets through. The
//! root itself is never yielded.

use std::ops::BitOr;

use crate::{DomTree, NodeData, NodeId};

/// Bit mask of node kinds a walk yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhatToShow(u32);

impl WhatToShow {
    pub const ELEMENT: WhatToShow = WhatToShow(1 << 0);
    pub const TEXT: WhatToShow = WhatToShow(1 << 2);
    pub const COMMENT: WhatToShow = WhatToShow(1 << 7);
    pub const ALL: WhatToShow = WhatToShow(u32::MAX);

    /// Whether nodes carrying `data` pass the mask
    pub fn shows(self, data: &NodeData) -> bool {
        let bit = match data {
            NodeData::Element(_) => Self::ELEMENT.0,
            NodeData::Text(_) => Self::TEXT.0,
            NodeData::Comment(_) => Self::COMMENT.0,
            // Document and doctype nodes only match ALL
            NodeData::Document | NodeData::Doctype { .. } => 1 << 8,
        };
        self.0 & bit != 0
    }
}

impl BitOr for WhatToShow {
    type Output = WhatToShow;

    fn bitor(self, rhs: WhatToShow) -> WhatToShow {
        WhatToShow(self.0 | rhs.0)
    }
}

/// Cursor over the filtered descendants of one subtree
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: NodeId,
    filter: WhatToShow,
    cursor: NodeId,
}

impl TreeWalker {
    pub fn new(root: NodeId, filter: WhatToShow) -> Self {
        Self { root, filter, cursor: root }
    }

    /// Text nodes under `root`, the walk the highlighter runs
    pub fn texts(root: NodeId) -> Self {
        Self::new(root, WhatToShow::TEXT)
    }

    /// Step to the next node the mask accepts, or `None` once the
    /// subtree is exhausted.
    pub fn next_node(&mut self, tree: &DomTree) -> Option<NodeId> {
        loop {
            self.cursor = tree.next_in_preorder(self.cursor, self.root)?;
            if self.filter.shows(&tree.get(self.cursor)?.data) {
                return Some(self.cursor);
            }
        }
    }

    pub fn iter(mut self, tree: &DomTree) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::from_fn(move || self.next_node(tree))
    }
}
