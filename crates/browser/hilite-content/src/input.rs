//! Keyboard input

use serde::{Deserialize, Serialize};

/// A keydown as delivered by the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key value (`"H"`, `"h"`, `"Enter"` ...), case as produced by the
    /// keyboard layout and modifiers
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

/// Key combination that toggles highlight mode (Ctrl+Shift+H by default)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shortcut {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self {
            key: "H".to_string(),
            ctrl: true,
            shift: true,
        }
    }
}

impl Shortcut {
    /// Required modifiers held and the exact key value; other modifiers
    /// are ignored.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        (!self.ctrl || event.ctrl) && (!self.shift || event.shift) && event.key == self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shortcut() {
        let shortcut = Shortcut::default();
        assert!(shortcut.matches(&KeyEvent::new("H").with_ctrl().with_shift()));
        assert!(shortcut.matches(&KeyEvent::new("H").with_ctrl().with_shift().with_alt()));
        assert!(!shortcut.matches(&KeyEvent::new("H").with_ctrl()));
        assert!(!shortcut.matches(&KeyEvent::new("h").with_ctrl().with_shift()));
        assert!(!shortcut.matches(&KeyEvent::new("J").with_ctrl().with_shift()));
    }

    #[test]
    fn test_shortcut_from_json() {
        let shortcut: Shortcut = serde_json::from_str(r#"{"key": "M", "shift": false}"#).unwrap();
        assert!(shortcut.matches(&KeyEvent::new("M").with_ctrl()));
        assert!(!shortcut.matches(&KeyEvent::new("M")));
    }
}
