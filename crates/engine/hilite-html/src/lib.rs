//! hilite HTML
//!
//! HTML5 parsing built on html5ever, converted into the hilite arena
//! DOM, plus innerHTML/outerHTML serialization.

mod parser;
mod serializer;

pub use hilite_dom::{Document, DomTree, Node, NodeId};
pub use parser::{HtmlParser, ParseError};
pub use serializer::{get_inner_html, get_outer_html};

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse an HTML string with a base URL
pub fn parse_with_url(html: &str, url: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse_with_url(html, url)
}
