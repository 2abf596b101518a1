//! hilite content controller
//!
//! The page side of the highlighter: a persisted on/off mode, the popup
//! message protocol, mouse and keyboard handling, and the categorization
//! hand-off.
//!
//! # Example
//! ```rust,ignore
//! use hilite_content::{ContentConfig, ContentScript, MemoryStore, Request};
//!
//! let mut script = ContentScript::new(ContentConfig::default(), MemoryStore::new());
//! script.handle_message(&mut doc, Request::ToggleHighlight { enabled: true });
//! script.on_mouse_up(&mut doc, &mut selection, target);
//! ```

mod categorize;
mod config;
mod input;
mod messages;
mod mode;
mod script;
mod store;

pub use categorize::{
    categorization_payload, CategorizeError, CategorizeRequest, CategorizeResponse, Categorizer,
    Category, CategoryList, CATEGORY_COLORS,
};
pub use config::ContentConfig;
pub use input::{KeyEvent, Shortcut};
pub use messages::{Content, Notification, Request, Response};
pub use mode::{HighlightMode, STORAGE_KEY};
pub use script::ContentScript;
pub use store::{JsonFileStore, MemoryStore, ModeStore, StoreError};

/// Errors surfaced to whoever feeds the controller raw messages
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("malformed request: {0}")]
    BadRequest(#[source] serde_json::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}
