//! Popup <-> page message protocol
//!
//! JSON objects tagged by `action`, e.g. `{"action": "toggleHighlight",
//! "enabled": true}`.

use hilite_core::MarkedContent;
use serde::{Deserialize, Serialize};

/// Request sent to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    ToggleHighlight { enabled: bool },
    GetStatus,
    ClearHighlights,
    GetMarkedContent,
    GetAllPageContent,
}

/// Payload of a content response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Marked(Vec<MarkedContent>),
    Page(String),
}

/// Reply to a [`Request`]; absent fields are left out of the JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            success: Some(true),
            ..Default::default()
        }
    }

    pub fn toggled(enabled: bool) -> Self {
        Self {
            success: Some(true),
            enabled: Some(enabled),
            content: None,
        }
    }

    pub fn status(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Default::default()
        }
    }

    pub fn marked(items: Vec<MarkedContent>) -> Self {
        Self {
            success: Some(true),
            enabled: None,
            content: Some(Content::Marked(items)),
        }
    }

    pub fn page(text: String) -> Self {
        Self {
            success: Some(true),
            enabled: None,
            content: Some(Content::Page(text)),
        }
    }
}

/// Unsolicited message from the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Notification {
    /// The mode was flipped from the page (keyboard shortcut)
    StatusChanged { enabled: bool },
}
