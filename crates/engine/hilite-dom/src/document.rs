//! A page: its arena tree, its address, and where its `<body>` is

use crate::{DomTree, NodeId};

#[derive(Debug, Clone)]
pub struct Document {
    tree: DomTree,
    url: String,
    root_element: NodeId,
    body: NodeId,
}

impl Document {
    /// `<html><head></head><body></body></html>` at `url`
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);
        let tree = &mut doc.tree;
        let [html, head, body] = ["html", "head", "body"].map(|tag| tree.create_element(tag));
        // Fresh elements always fit under the root and each other
        let built = tree
            .append_child(NodeId::ROOT, html)
            .and_then(|_| tree.append_child(html, head))
            .and_then(|_| tree.append_child(html, body));
        debug_assert!(built.is_ok());
        doc.finalize();
        doc
    }

    /// A bare document node with no children; parsers fill it in and
    /// then call [`Document::finalize`].
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_owned(),
            root_element: NodeId::NONE,
            body: NodeId::NONE,
        }
    }

    /// Re-find `<html>` and its `<body>` child
    pub fn finalize(&mut self) {
        let child_tagged = |tree: &DomTree, parent: NodeId, tag: &str| {
            tree.children(parent)
                .find(|(_, node)| node.as_element().is_some_and(|e| e.tag == tag))
                .map_or(NodeId::NONE, |(id, _)| id)
        };
        self.root_element = child_tagged(&self.tree, NodeId::ROOT, "html");
        self.body = child_tagged(&self.tree, self.root_element, "body");
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn document_element(&self) -> Option<NodeId> {
        self.root_element.some()
    }

    /// Where page-level state such as the cursor lives. Missing for
    /// frameset or hand-built documents.
    pub fn body(&self) -> Option<NodeId> {
        self.body.some()
    }

    /// First element in tree order whose `id` attribute equals `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = &self.tree;
        tree.descendants(NodeId::ROOT).find(|&node| {
            tree.get(node)
                .and_then(|n| n.as_element())
                .is_some_and(|e| e.get_attr("id") == Some(id))
        })
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
