//! Highlight configuration

use serde::{Deserialize, Serialize};

/// Class carried by every marker element
pub const MARKER_CLASS: &str = "chrome-highlight-extension";

/// Data attribute set on every marker element
pub const MARKER_ATTRIBUTE: &str = "data-highlighted";

/// Sky blue
pub const DEFAULT_COLOR: &str = "#87CEEB";

/// How markers look and how they are found again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightConfig {
    /// Background color of new markers
    pub color: String,

    /// Class identifying marker elements
    pub class_name: String,

    /// Tag used for marker elements
    pub tag: String,

    /// Cursor shown over a marker
    pub cursor: String,

    /// Merge adjacent text nodes after a marker is unwrapped
    pub normalize_on_remove: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            class_name: MARKER_CLASS.to_string(),
            tag: "span".to_string(),
            cursor: "pointer".to_string(),
            normalize_on_remove: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: HighlightConfig = serde_json::from_str(r#"{"color": "yellow"}"#).unwrap();
        assert_eq!(config.color, "yellow");
        assert_eq!(config.class_name, MARKER_CLASS);
        assert!(!config.normalize_on_remove);
    }
}
