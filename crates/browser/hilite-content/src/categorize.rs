//! Page categorization
//!
//! The categorizer is an outside service: it receives page text and
//! answers with a category and a summary. This module builds what is sent
//! and keeps the list of categories seen so far.

use hilite_core::MarkedContent;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Colors handed out to new categories, in order
pub const CATEGORY_COLORS: &[&str] = &[
    "#8BC34A", "#4CAF50", "#2196F3", "#03A9F4", "#FF9800", "#FF5722", "#E91E63", "#9C27B0",
    "#673AB7", "#3F51B5",
];

/// Body of a categorization request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizeRequest {
    pub content: String,
    /// Known category names; sent empty
    pub categories: Vec<String>,
}

/// Answer of the categorizer; either field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizeResponse {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Categorization failures
#[derive(Debug, thiserror::Error)]
pub enum CategorizeError {
    #[error("categorizer unavailable: {0}")]
    Unavailable(String),

    #[error("categorizer returned status {0}")]
    Status(u16),

    #[error("invalid categorizer response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Something that labels text
pub trait Categorizer {
    fn categorize(&self, request: &CategorizeRequest) -> Result<CategorizeResponse, CategorizeError>;
}

/// Text to categorize: the marked passages joined by spaces, or the
/// readable page text when nothing is marked. `None` when both are empty.
pub fn categorization_payload(
    marked: &[MarkedContent],
    page_content: impl FnOnce() -> String,
) -> Option<CategorizeRequest> {
    let content = if marked.is_empty() {
        tracing::debug!("nothing marked, categorizing the whole page");
        page_content()
    } else {
        marked
            .iter()
            .map(|item| item.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    };
    if content.is_empty() {
        return None;
    }
    Some(CategorizeRequest {
        content,
        categories: Vec::new(),
    })
}

/// A named, colored category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: String,
}

/// Categories in the order they were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryList {
    categories: Vec<Category>,
}

impl CategoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a stored list, upgrading bare names to categories and
    /// dropping entries that are neither.
    pub fn from_stored(value: &Value) -> Self {
        let mut list = Self::new();
        let Some(entries) = value.as_array() else {
            return list;
        };
        for entry in entries {
            match entry {
                Value::String(name) if !name.trim().is_empty() => {
                    let color = list.next_color();
                    list.categories.push(Category {
                        name: name.clone(),
                        color,
                    });
                }
                Value::Object(_) => match serde_json::from_value::<Category>(entry.clone()) {
                    Ok(category) if !category.name.is_empty() && !category.color.is_empty() => {
                        list.categories.push(category)
                    }
                    _ => tracing::debug!("dropping stored category {}", entry),
                },
                _ => tracing::debug!("dropping stored category {}", entry),
            }
        }
        list
    }

    /// Add a category unless one with the same name (ignoring case)
    /// exists. Returns the category now standing for `name`, or `None`
    /// for a blank name.
    pub fn add(&mut self, name: &str) -> Option<&Category> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let existing = self
            .categories
            .iter()
            .position(|c| same_name(&c.name, name));
        let index = match existing {
            Some(index) => index,
            None => {
                let color = self.next_color();
                self.categories.push(Category {
                    name: name.to_string(),
                    color,
                });
                self.categories.len() - 1
            }
        };
        self.categories.get(index)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| same_name(&c.name, name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn next_color(&self) -> String {
        CATEGORY_COLORS[self.categories.len() % CATEGORY_COLORS.len()].to_string()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
