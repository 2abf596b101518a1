//! Content controller configuration

use hilite_core::HighlightConfig;
use serde::{Deserialize, Serialize};

use crate::input::Shortcut;
use crate::mode::STORAGE_KEY;

/// Everything the page-side controller can be told, loadable from JSON.
/// Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    /// Storage key of the persisted mode flag
    pub storage_key: String,

    /// Mouse-ups inside an element with this class never highlight
    pub ignore_container_class: String,

    /// Body cursor while highlight mode is on
    pub active_cursor: String,

    /// Toggle shortcut
    pub shortcut: Shortcut,

    /// Marker appearance
    pub highlight: HighlightConfig,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            ignore_container_class: "container".to_string(),
            active_cursor: "crosshair".to_string(),
            shortcut: Shortcut::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl ContentConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
