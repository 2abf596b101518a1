//! Readable page content
//!
//! Fallback text for categorization when nothing is marked.

use hilite_dom::{DomTree, NodeId};

/// Tags whose text counts as readable, in collection order
pub const READABLE_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "article", "section", "main", "li", "td", "th",
    "blockquote", "pre",
];

/// Trimmed text of every readable element under `root`, joined by spaces.
///
/// Elements are collected tag by tag, so nested readable elements (a `<p>`
/// inside an `<article>`) contribute their text once per match.
pub fn readable_content(tree: &DomTree, root: NodeId) -> String {
    READABLE_TAGS
        .iter()
        .flat_map(|tag| tree.elements_by_tag(root, tag))
        .map(|el| tree.text_content(el).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
