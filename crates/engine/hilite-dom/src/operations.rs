//! DOM Node Operations
//!
//! Core node manipulation: appendChild, insertBefore, removeChild.
//! Inserting a node that already has a parent moves it, as in the DOM.

use crate::{DomTree, NodeData, NodeId};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("node {0} not found")]
    NotFound(NodeId),
    /// Hierarchy error (e.g., inserting an ancestor into its descendant)
    #[error("hierarchy request error inserting {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
    /// Node is not a child of the given parent
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    /// Offset past the end of a node
    #[error("offset {offset} out of bounds for node {node} of length {length}")]
    IndexSize {
        node: NodeId,
        offset: usize,
        length: usize,
    },
    /// Range start lies after its end
    #[error("range start is after its end")]
    InvertedRange,
    /// Invalid node type for the operation
    #[error("invalid node type for {0}")]
    InvalidNodeType(NodeId),
}

impl DomTree {
    fn require(&self, id: NodeId) -> DomResult<()> {
        self.get(id).map(|_| ()).ok_or(DomError::NotFound(id))
    }

    /// Append a child node
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert `new_child` before `ref_child` (or at the end when `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        ref_child: Option<NodeId>,
    ) -> DomResult<NodeId> {
        self.require(parent)?;
        self.require(new_child)?;

        let parent_accepts_children = self
            .get(parent)
            .is_some_and(|n| matches!(n.data, NodeData::Element(_) | NodeData::Document));
        let child_insertable = self
            .get(new_child)
            .is_some_and(|n| !matches!(n.data, NodeData::Document));
        if !parent_accepts_children || !child_insertable || self.contains(new_child, parent) {
            return Err(DomError::HierarchyRequest {
                parent,
                child: new_child,
            });
        }

        let mut reference = ref_child;
        if let Some(r) = reference {
            self.require(r)?;
            if self.parent(r) != Some(parent) {
                return Err(DomError::NotAChild { parent, child: r });
            }
            if r == new_child {
                reference = self.get(r).and_then(|n| n.next_sibling.some());
            }
        }

        self.unlink(new_child);

        let prev = match reference {
            Some(r) => self.nodes[r.index()].prev_sibling,
            None => self.nodes[parent.index()].last_child,
        };
        let next = reference.unwrap_or(NodeId::NONE);

        {
            let node = &mut self.nodes[new_child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        match prev.some() {
            Some(p) => self.nodes[p.index()].next_sibling = new_child,
            None => self.nodes[parent.index()].first_child = new_child,
        }
        match next.some() {
            Some(n) => self.nodes[n.index()].prev_sibling = new_child,
            None => self.nodes[parent.index()].last_child = new_child,
        }

        tracing::trace!("inserted {} into {}", new_child, parent);
        Ok(new_child)
    }

    /// Remove a child node; it stays in the arena, detached
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.require(parent)?;
        self.require(child)?;
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.unlink(child);
        tracing::trace!("removed {} from {}", child, parent);
        Ok(child)
    }

    /// Detach a node from wherever it is; no-op if already detached
    pub fn detach(&mut self, id: NodeId) -> DomResult<NodeId> {
        self.require(id)?;
        self.unlink(id);
        Ok(id)
    }

    /// Replace the content of a text node
    pub fn set_text(&mut self, id: NodeId, content: &str) -> DomResult<()> {
        match self.get_mut(id).map(|n| &mut n.data) {
            Some(NodeData::Text(t)) => {
                t.content = content.to_string();
                Ok(())
            }
            Some(_) => Err(DomError::InvalidNodeType(id)),
            None => Err(DomError::NotFound(id)),
        }
    }

    /// Merge adjacent text children of `id` and drop empty ones
    pub fn normalize(&mut self, id: NodeId) -> DomResult<()> {
        self.require(id)?;
        let children: Vec<NodeId> = self.children(id).map(|(child, _)| child).collect();
        let mut run_head: Option<NodeId> = None;
        for child in children {
            let Some(text) = self.text(child).map(str::to_string) else {
                run_head = None;
                continue;
            };
            match run_head {
                _ if text.is_empty() => {
                    self.unlink(child);
                }
                Some(head) => {
                    if let Some(NodeData::Text(t)) = self.get_mut(head).map(|n| &mut n.data) {
                        t.content.push_str(&text);
                    }
                    self.unlink(child);
                }
                None => run_head = Some(child),
            }
        }
        Ok(())
    }

    fn unlink(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }
        match prev.some() {
            Some(p) => self.nodes[p.index()].next_sibling = next,
            None => self.nodes[parent.index()].first_child = next,
        }
        match next.some() {
            Some(n) => self.nodes[n.index()].prev_sibling = prev,
            None => self.nodes[parent.index()].last_child = prev,
        }
        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }
}
