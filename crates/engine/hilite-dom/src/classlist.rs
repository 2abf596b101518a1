//! Parsed form of the `class` attribute

/// Whitespace-separated class tokens, deduplicated, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens of an attribute value; repeats keep their first position
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        value.split_whitespace().for_each(|token| list.add(token));
        list
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Append `token` unless it is empty or already listed
    pub fn add(&mut self, token: &str) {
        if !token.is_empty() && !self.contains(token) {
            self.0.push(token.to_owned());
        }
    }

    /// Attribute text, tokens joined by single spaces
    pub fn value(&self) -> String {
        self.0.join(" ")
    }

    pub fn set_value(&mut self, value: &str) {
        *self = Self::parse(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
