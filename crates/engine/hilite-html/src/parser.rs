//! html5ever front end
//!
//! html5ever builds an `RcDom`; that tree is copied node by node into the
//! arena. Whitespace-only text survives the copy because selections
//! routinely span it and the highlighter must see it to skip it.

use hilite_dom::{Document, DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build DOM: {0}")]
    Dom(#[from] hilite_dom::DomError),
}

/// Stateless entry point; [`crate::parse`] wraps it
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse `html` as the page found at `url`
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        let rc = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut doc = Document::empty(url);
        copy_children(&rc.document, doc.tree_mut(), NodeId::ROOT)?;
        doc.finalize();

        tracing::debug!(url, nodes = doc.tree().len(), "parsed page");
        Ok(doc)
    }
}

fn copy_children(from: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), ParseError> {
    for child in from.children.borrow().iter() {
        copy_node(child, tree, parent)?;
    }
    Ok(())
}

fn copy_node(from: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), ParseError> {
    let id = match &from.data {
        RcNodeData::Document => return copy_children(from, tree, parent),
        // Only XML produces these
        RcNodeData::ProcessingInstruction { .. } => return Ok(()),
        RcNodeData::Doctype { name, .. } => tree.create_doctype(name),
        RcNodeData::Text { contents } => tree.create_text(&contents.borrow()),
        RcNodeData::Comment { contents } => tree.create_comment(contents),
        RcNodeData::Element { name, attrs, .. } => {
            let id = tree.create_element(&name.local);
            if let Some(elem) = tree.get_mut(id).and_then(|n| n.as_element_mut()) {
                for attr in attrs.borrow().iter() {
                    elem.set_attr(&attr.name.local, attr.value.to_string());
                }
            }
            id
        }
    };
    tree.append_child(parent, id)?;
    copy_children(from, tree, id)
}
