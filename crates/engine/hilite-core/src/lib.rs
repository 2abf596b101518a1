//! hilite core
//!
//! Turns an arbitrary selection over a live DOM tree into highlight
//! markers and back:
//!
//! - [`resolve`] walks the tree (read-only) and produces the ordered text
//!   slices that cover exactly the selected, non-whitespace characters.
//! - [`apply_marker`] splits one text node and wraps the selected part in
//!   a marker `<span>`, preserving text content and document order.
//! - [`remove_marker`] / [`clear_all`] unwrap markers again.
//! - [`list_markers`] reports what is currently marked.
//!
//! The DOM itself is the marker registry: markers are found by their
//! class, nothing else keeps track of them.
//!
//! # Example
//! ```rust,ignore
//! use hilite_core::Highlighter;
//! use hilite_dom::Range;
//!
//! let highlighter = Highlighter::default();
//! let range = Range::between(first_text, 3, last_text, 2);
//! let markers = highlighter.highlight_selection(doc.tree_mut(), &range);
//! ```

mod config;
mod error;
mod find;
mod highlighter;
mod mutator;
mod query;
mod readable;
mod removal;
mod resolver;

pub use config::{HighlightConfig, DEFAULT_COLOR, MARKER_ATTRIBUTE, MARKER_CLASS};
pub use error::HighlightError;
pub use find::{find_text, find_text_nth};
pub use highlighter::Highlighter;
pub use mutator::apply_marker;
pub use query::{list_markers, MarkedContent};
pub use readable::{readable_content, READABLE_TAGS};
pub use removal::{clear_all, remove_marker};
pub use resolver::{resolve, TextSlice};
