//! innerHTML / outerHTML
//!
//! Markup is written back compactly, exactly as the tree holds it, so a
//! page whose markers were all removed serializes to the same string as
//! before they were added.

use hilite_dom::{DomTree, NodeData, NodeId};

/// Elements written without an end tag
const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Markup of the children of `node`
pub fn get_inner_html(tree: &DomTree, node: NodeId) -> String {
    let mut out = Markup { tree, buf: String::new() };
    out.children(node);
    out.buf
}

/// Markup of `node` itself and everything under it
pub fn get_outer_html(tree: &DomTree, node: NodeId) -> String {
    let mut out = Markup { tree, buf: String::new() };
    out.node(node);
    out.buf
}

struct Markup<'a> {
    tree: &'a DomTree,
    buf: String,
}

impl Markup<'_> {
    fn children(&mut self, parent: NodeId) {
        let tree = self.tree;
        for (child, _) in tree.children(parent) {
            self.node(child);
        }
    }

    fn node(&mut self, id: NodeId) {
        let tree = self.tree;
        let Some(node) = tree.get(id) else { return };
        match &node.data {
            NodeData::Document => self.children(id),
            NodeData::Doctype { name } => {
                self.buf.push_str("<!DOCTYPE ");
                self.buf.push_str(name);
                self.buf.push('>');
            }
            NodeData::Comment(text) => {
                self.buf.push_str("<!--");
                self.buf.push_str(text);
                self.buf.push_str("-->");
            }
            NodeData::Text(text) => self.escaped(&text.content, false),
            NodeData::Element(elem) => {
                let tag = elem.tag.as_str();
                self.buf.push('<');
                self.buf.push_str(tag);
                for attr in &elem.attrs {
                    self.buf.push(' ');
                    self.buf.push_str(&attr.name);
                    self.buf.push_str("=\"");
                    self.escaped(&attr.value, true);
                    self.buf.push('"');
                }
                self.buf.push('>');
                if VOID.contains(&tag) {
                    return;
                }

                if matches!(tag, "script" | "style") {
                    // Raw text content goes out untouched
                    for (_, child) in tree.children(id) {
                        self.buf.push_str(child.as_text().unwrap_or_default());
                    }
                } else {
                    self.children(id);
                }
                self.buf.push_str("</");
                self.buf.push_str(tag);
                self.buf.push('>');
            }
        }
    }

    /// Entity-escape `text`; quotes only matter inside attribute values
    fn escaped(&mut self, text: &str, attribute: bool) {
        for c in text.chars() {
            match c {
                '&' => self.buf.push_str("&amp;"),
                '\u{a0}' => self.buf.push_str("&nbsp;"),
                '"' if attribute => self.buf.push_str("&quot;"),
                '<' if !attribute => self.buf.push_str("&lt;"),
                '>' if !attribute => self.buf.push_str("&gt;"),
                _ => self.buf.push(c),
            }
        }
    }
}
