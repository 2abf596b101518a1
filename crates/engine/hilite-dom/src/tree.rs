//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: a node removed from the tree stays in the arena
//! as a detached node, so stale `NodeId`s keep resolving and can be
//! checked for a parent instead of dangling.

use std::cmp::Ordering;

use crate::{Node, NodeData, NodeId};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    pub(crate) nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Create a detached doctype
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(Node::doctype(name))
    }

    /// Parent of a node, if attached
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.some())
    }

    /// Parent only when it is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|&p| self.is_element(p))
    }

    #[inline]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    #[inline]
    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_text)
    }

    /// Text of a text node
    #[inline]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(Node::as_text)
    }

    /// Lowercase tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)
            .and_then(Node::as_element)
            .map(|e| e.tag.as_str())
    }

    /// Iterate over the children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Number of children
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Position of a node among its siblings
    pub fn child_index(&self, id: NodeId) -> usize {
        let mut index = 0;
        let mut cur = self.get(id).map_or(NodeId::NONE, |n| n.prev_sibling);
        while let Some(node) = self.get(cur) {
            index += 1;
            cur = node.prev_sibling;
        }
        index
    }

    /// DOM node length: bytes for character data, children otherwise
    pub fn node_length(&self, id: NodeId) -> usize {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Text(t)) => t.content.len(),
            Some(NodeData::Comment(c)) => c.len(),
            Some(NodeData::Doctype { .. }) | None => 0,
            Some(_) => self.child_count(id),
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Text(t)) => t.content.clone(),
            Some(NodeData::Comment(c)) => c.clone(),
            Some(NodeData::Element(_)) | Some(NodeData::Document) => {
                let mut out = String::new();
                self.collect_text(id, &mut out);
                out
            }
            _ => String::new(),
        }
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for (child, node) in self.children(id) {
            match &node.data {
                NodeData::Text(t) => out.push_str(&t.content),
                NodeData::Element(_) => self.collect_text(child, out),
                _ => {}
            }
        }
    }

    /// Ancestors from the parent up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// True if `ancestor` is a strict ancestor of `node`
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|a| a == ancestor)
    }

    /// True if `node` is `ancestor` or inside it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        ancestor == node || self.is_ancestor(ancestor, node)
    }

    /// Deepest node that contains both `a` and `b`
    pub fn common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        std::iter::once(a)
            .chain(self.ancestors(a))
            .find(|&candidate| self.contains(candidate, b))
    }

    /// Next node in pre-order, confined to the subtree of `root`
    pub fn next_in_preorder(&self, id: NodeId, root: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        if node.first_child.is_valid() {
            return Some(node.first_child);
        }
        let mut cur = id;
        while cur != root {
            let node = self.get(cur)?;
            if node.next_sibling.is_valid() {
                return Some(node.next_sibling);
            }
            cur = node.parent.some()?;
        }
        None
    }

    /// Strict descendants of `root` in document order
    pub fn descendants(&self, root: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.next_in_preorder(root, root), move |&id| {
            self.next_in_preorder(id, root)
        })
    }

    /// Document-order comparison of two nodes.
    ///
    /// Nodes in different trees (e.g. one detached) are ordered by arena
    /// index so the result stays consistent.
    pub fn tree_order(&self, a: NodeId, b: NodeId) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let path_a = self.path_from_root(a);
        let path_b = self.path_from_root(b);
        if path_a.first() != path_b.first() {
            return a.cmp(&b);
        }
        let shared = path_a
            .iter()
            .zip(&path_b)
            .take_while(|(x, y)| x == y)
            .count();
        match (path_a.get(shared), path_b.get(shared)) {
            // a is an ancestor of b
            (None, _) => Ordering::Less,
            (_, None) => Ordering::Greater,
            (Some(&sa), Some(&sb)) => {
                if self.following_siblings(sa).any(|s| s == sb) {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }

    fn following_siblings(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let next = |n: NodeId| self.get(n).and_then(|node| node.next_sibling.some());
        std::iter::successors(next(id), move |&s| next(s))
    }

    fn path_from_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = std::iter::once(id).chain(self.ancestors(id)).collect();
        path.reverse();
        path
    }

    /// Elements under `root` carrying a class, in document order
    pub fn elements_with_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|&id| {
                self.get(id)
                    .and_then(Node::as_element)
                    .is_some_and(|e| e.has_class(class))
            })
            .collect()
    }

    /// Elements under `root` with a tag name, in document order
    pub fn elements_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|&id| self.tag_name(id).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }

    /// Nearest inclusive ancestor element carrying a class
    pub fn closest_with_class(&self, id: NodeId, class: &str) -> Option<NodeId> {
        std::iter::once(id).chain(self.ancestors(id)).find(|&n| {
            self.get(n)
                .and_then(Node::as_element)
                .is_some_and(|e| e.has_class(class))
        })
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (DomTree, NodeId, NodeId, NodeId, NodeId) {
        // root > div > (p > "a", p > "b")
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let p1 = tree.create_element("p");
        let p2 = tree.create_element("p");
        let a = tree.create_text("a");
        let b = tree.create_text("b");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, p1).unwrap();
        tree.append_child(div, p2).unwrap();
        tree.append_child(p1, a).unwrap();
        tree.append_child(p2, b).unwrap();
        (tree, div, p1, a, b)
    }

    #[test]
    fn test_text_content() {
        let (tree, div, _, _, _) = sample();
        assert_eq!(tree.text_content(div), "ab");
        assert_eq!(tree.node_length(div), 2);
    }

    #[test]
    fn test_tree_order() {
        let (tree, div, p1, a, b) = sample();
        assert_eq!(tree.tree_order(a, b), Ordering::Less);
        assert_eq!(tree.tree_order(b, a), Ordering::Greater);
        assert_eq!(tree.tree_order(div, a), Ordering::Less);
        assert_eq!(tree.tree_order(a, p1), Ordering::Greater);
        assert_eq!(tree.tree_order(a, a), Ordering::Equal);
    }

    #[test]
    fn test_common_ancestor() {
        let (tree, div, p1, a, b) = sample();
        assert_eq!(tree.common_ancestor(a, b), Some(div));
        assert_eq!(tree.common_ancestor(a, p1), Some(p1));
        assert_eq!(tree.common_ancestor(a, a), Some(a));
    }

    #[test]
    fn test_descendants_preorder() {
        let (tree, div, p1, a, b) = sample();
        let order: Vec<_> = tree.descendants(div).collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], p1);
        assert_eq!(order[1], a);
        assert_eq!(order[3], b);
    }
}
