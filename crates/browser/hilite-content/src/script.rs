//! Page-side controller
//!
//! Owns the mode flag and the highlighter, and turns page events and popup
//! messages into highlighter calls. The document is passed in on every
//! call; the controller keeps no node ids between events, so markers live
//! only in the DOM.

use hilite_core::{readable_content, Highlighter};
use hilite_dom::{Document, NodeId, Selection};

use crate::categorize::{
    categorization_payload, CategorizeResponse, Categorizer, CategorizeError, CategoryList,
};
use crate::config::ContentConfig;
use crate::input::KeyEvent;
use crate::messages::{Notification, Request, Response};
use crate::mode::HighlightMode;
use crate::store::ModeStore;
use crate::ContentError;

/// The highlight controller of one page
#[derive(Debug)]
pub struct ContentScript<S> {
    config: ContentConfig,
    mode: HighlightMode<S>,
    highlighter: Highlighter,
    outbox: Vec<Notification>,
}

impl<S: ModeStore> ContentScript<S> {
    /// Restore the mode from `store`
    pub fn new(config: ContentConfig, store: S) -> Self {
        let mode = HighlightMode::load(store, &config.storage_key);
        let highlighter = Highlighter::new(config.highlight.clone());
        Self {
            config,
            mode,
            highlighter,
            outbox: Vec::new(),
        }
    }

    /// Bring the page in line with the restored mode
    pub fn attach(&self, doc: &mut Document) {
        self.update_cursor(doc);
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    pub fn mode(&self) -> &HighlightMode<S> {
        &self.mode
    }

    pub fn is_enabled(&self) -> bool {
        self.mode.is_enabled()
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Answer a popup request
    pub fn handle_message(&mut self, doc: &mut Document, request: Request) -> Response {
        tracing::debug!("message {:?}", request);
        match request {
            Request::ToggleHighlight { enabled } => {
                self.set_enabled(doc, enabled);
                Response::toggled(enabled)
            }
            Request::GetStatus => Response::status(self.is_enabled()),
            Request::ClearHighlights => {
                self.highlighter.clear_all(doc.tree_mut());
                Response::ok()
            }
            Request::GetMarkedContent => Response::marked(self.highlighter.list_markers(doc.tree())),
            Request::GetAllPageContent => Response::page(self.page_content(doc)),
        }
    }

    /// [`handle_message`](Self::handle_message) over JSON text
    pub fn handle_json(&mut self, doc: &mut Document, message: &str) -> Result<String, ContentError> {
        let request = serde_json::from_str(message).map_err(ContentError::BadRequest)?;
        let response = self.handle_message(doc, request);
        Ok(serde_json::to_string(&response)?)
    }

    /// Mark the selection if highlight mode is on and the pointer was
    /// released over page content. Clears the selection after marking.
    pub fn on_mouse_up(
        &mut self,
        doc: &mut Document,
        selection: &mut Selection,
        target: NodeId,
    ) -> Vec<NodeId> {
        if !self.is_enabled() {
            return Vec::new();
        }
        if doc
            .tree()
            .closest_with_class(target, &self.config.ignore_container_class)
            .is_some()
        {
            tracing::trace!("mouse-up inside {}, ignored", self.config.ignore_container_class);
            return Vec::new();
        }
        let Some(range) = selection.get_range_at(0).copied() else {
            return Vec::new();
        };
        if range.collapsed() || range.to_string(doc.tree()).trim().is_empty() {
            return Vec::new();
        }

        let markers = self.highlighter.highlight_selection(doc.tree_mut(), &range);
        selection.remove_all_ranges();
        markers
    }

    /// Toggle the mode on the configured shortcut. Returns whether the
    /// event was consumed.
    pub fn on_key_down(&mut self, doc: &mut Document, event: &KeyEvent) -> bool {
        if !self.config.shortcut.matches(event) {
            return false;
        }
        let enabled = !self.is_enabled();
        self.set_enabled(doc, enabled);
        self.outbox.push(Notification::StatusChanged { enabled });
        true
    }

    /// Remove the marker around `target`, in or out of highlight mode
    pub fn on_double_click(&mut self, doc: &mut Document, target: NodeId) -> bool {
        self.highlighter.dispatch_double_click(doc.tree_mut(), target)
    }

    /// Notifications raised since the last call, oldest first
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    /// Readable text of the whole page
    pub fn page_content(&self, doc: &Document) -> String {
        readable_content(doc.tree(), NodeId::ROOT)
    }

    /// Send the marked text (or the page text) to `categorizer` and record
    /// the category it answers with. `Ok(None)` when the page has no text.
    pub fn categorize(
        &self,
        doc: &Document,
        categorizer: &dyn Categorizer,
        categories: &mut CategoryList,
    ) -> Result<Option<CategorizeResponse>, CategorizeError> {
        let marked = self.highlighter.list_markers(doc.tree());
        let Some(request) = categorization_payload(&marked, || self.page_content(doc)) else {
            tracing::debug!("no text to categorize");
            return Ok(None);
        };
        tracing::debug!("categorizing {} bytes", request.content.len());

        let response = categorizer.categorize(&request)?;
        match response.category.as_deref() {
            Some(name) => {
                categories.add(name);
            }
            None => tracing::warn!("categorizer answered without a category"),
        }
        Ok(Some(response))
    }

    fn set_enabled(&mut self, doc: &mut Document, enabled: bool) {
        self.mode.set(enabled);
        self.update_cursor(doc);
        tracing::debug!("highlight mode {}", if enabled { "on" } else { "off" });
    }

    /// Show the active cursor on the body while the mode is on
    fn update_cursor(&self, doc: &mut Document) {
        let Some(body) = doc.body() else {
            return;
        };
        let enabled = self.is_enabled();
        if let Some(elem) = doc.tree_mut().get_mut(body).and_then(|n| n.as_element_mut()) {
            if enabled {
                elem.set_style_property("cursor", &self.config.active_cursor);
            } else {
                elem.remove_style_property("cursor");
            }
        }
    }
}
