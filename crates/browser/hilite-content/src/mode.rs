//! Highlight mode state
//!
//! A plain state object the event handlers consult before acting. The
//! highlighter itself never looks at it.

use serde_json::Value;

use crate::store::ModeStore;

/// Storage key of the persisted flag
pub const STORAGE_KEY: &str = "highlightEnabled";

/// Whether selections are turned into markers, persisted across loads
#[derive(Debug)]
pub struct HighlightMode<S> {
    enabled: bool,
    key: String,
    store: S,
}

impl<S: ModeStore> HighlightMode<S> {
    /// Restore the flag from storage. Anything but a stored `true`
    /// (including a read failure) starts disabled.
    pub fn load(store: S, key: &str) -> Self {
        let enabled = match store.get(key) {
            Ok(value) => value.as_ref().and_then(Value::as_bool).unwrap_or(false),
            Err(e) => {
                tracing::warn!("could not read {}: {}", key, e);
                false
            }
        };
        tracing::debug!("highlight mode restored as {}", enabled);
        Self {
            enabled,
            key: key.to_string(),
            store,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the flag and persist it. Storage failures are logged; the
    /// in-memory state changes regardless.
    pub fn set(&mut self, enabled: bool) {
        self.enabled = enabled;
        if let Err(e) = self.store.set(&self.key, Value::Bool(enabled)) {
            tracing::warn!("could not persist {}: {}", self.key, e);
        }
    }

    /// Flip the flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.set(!self.enabled);
        self.enabled
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
