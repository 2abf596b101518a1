//! Arena nodes
//!
//! Relatives are referenced by [`NodeId`] rather than by pointer, so the
//! tree can be rewired in place while callers keep ids they obtained
//! earlier. A removed node keeps its data; only its links are cleared.

use crate::{ClassList, NodeId};

/// One slot in the arena. Unset links hold [`NodeId::NONE`].
#[derive(Debug, Clone)]
pub struct Node {
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
    pub data: NodeData,
}

impl Node {
    fn unlinked(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    pub fn element(tag: &str) -> Self {
        Self::unlinked(NodeData::Element(ElementData::new(tag)))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::unlinked(NodeData::Text(TextData { content: content.into() }))
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Self::unlinked(NodeData::Comment(content.into()))
    }

    pub fn doctype(name: impl Into<String>) -> Self {
        Self::unlinked(NodeData::Doctype { name: name.into() })
    }

    /// The arena root every page hangs from
    pub fn document() -> Self {
        Self::unlinked(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Text and comments hold characters instead of children
    #[inline]
    pub fn is_character_data(&self) -> bool {
        matches!(self.data, NodeData::Text(_) | NodeData::Comment(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        if let NodeData::Element(elem) = &self.data { Some(elem) } else { None }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        if let NodeData::Element(elem) = &mut self.data { Some(elem) } else { None }
    }

    /// Characters of a text node; `None` for every other kind
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        if let NodeData::Text(text) = &self.data { Some(&text.content) } else { None }
    }
}

#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Doctype { name: String },
    Element(ElementData),
    Text(TextData),
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase local tag name
    pub tag: String,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
    /// Parsed `class` attribute
    pub classes: ClassList,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            classes: ClassList::new(),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, keeping the class list in sync
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if name == "class" {
            self.classes.set_value(&value);
        }
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Remove an attribute, returns true if it was present
    pub fn remove_attr(&mut self, name: &str) -> bool {
        if name == "class" {
            self.classes = ClassList::new();
        }
        let before = self.attrs.len();
        self.attrs.retain(|a| a.name != name);
        self.attrs.len() != before
    }

    /// Check for a class token
    #[inline]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add class tokens and mirror them into the `class` attribute
    pub fn add_class(&mut self, class: &str) {
        self.classes.add(class);
        let value = self.classes.value();
        self.set_attr("class", value);
    }

    /// Read one declaration from the inline `style` attribute
    pub fn style_property(&self, property: &str) -> Option<&str> {
        let style = self.get_attr("style")?;
        declarations(style)
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    /// Set one declaration in the inline `style` attribute
    pub fn set_style_property(&mut self, property: &str, value: &str) {
        let mut decls: Vec<(String, String)> = self
            .get_attr("style")
            .map(|style| {
                declarations(style)
                    .filter(|(name, _)| *name != property)
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default();
        if !value.is_empty() {
            decls.push((property.to_string(), value.to_string()));
        }
        self.write_style(&decls);
    }

    /// Drop one declaration from the inline `style` attribute
    pub fn remove_style_property(&mut self, property: &str) {
        self.set_style_property(property, "");
    }

    fn write_style(&mut self, decls: &[(String, String)]) {
        if decls.is_empty() {
            self.remove_attr("style");
            return;
        }
        let style = decls
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("style", style);
    }
}

/// Split `a: b; c: d` into trimmed pairs
fn declarations(style: &str) -> impl Iterator<Item = (&str, &str)> {
    style.split(';').filter_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        let name = name.trim();
        (!name.is_empty()).then(|| (name, value.trim()))
    })
}

#[derive(Debug, Clone)]
pub struct TextData {
    pub content: String,
}

/// One `name="value"` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}
