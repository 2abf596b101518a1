//! Marker query

use hilite_dom::{DomTree, NodeId};
use serde::{Deserialize, Serialize};

/// One marked passage as reported to the popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedContent {
    /// 1-based position in the query result (document order, not creation order)
    pub index: usize,
    /// Trimmed marker text
    pub text: String,
    /// Lowercase tag of the element holding the marker
    pub element: String,
    /// Length of `text` in characters
    pub length: usize,
}

/// List the markers under `root` in document order
pub fn list_markers(tree: &DomTree, root: NodeId, class_name: &str) -> Vec<MarkedContent> {
    tree.elements_with_class(root, class_name)
        .into_iter()
        .enumerate()
        .map(|(i, marker)| {
            let text = tree.text_content(marker).trim().to_string();
            let element = tree
                .parent_element(marker)
                .and_then(|p| tree.tag_name(p))
                .unwrap_or_default()
                .to_string();
            MarkedContent {
                index: i + 1,
                length: text.chars().count(),
                text,
                element,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let item = MarkedContent {
            index: 1,
            text: "hello".into(),
            element: "p".into(),
            length: 5,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"index": 1, "text": "hello", "element": "p", "length": 5})
        );
    }
}
