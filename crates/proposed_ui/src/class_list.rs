//! Ordered, deduplicated utility-class token lists.

use std::fmt;

/// Ordered set of utility-class tokens.
///
/// Tokens keep the position of their first insertion; later duplicates are ignored so merged
/// fragments stay stable across renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated token in `classes`.
    pub fn push(&mut self, classes: &str) -> &mut Self {
        for token in classes.split_ascii_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
        self
    }

    /// Appends `classes` only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, classes: &str) -> &mut Self {
        if condition {
            self.push(classes);
        }
        self
    }

    /// Appends `classes` when present.
    pub fn push_opt(&mut self, classes: Option<&str>) -> &mut Self {
        if let Some(classes) = classes {
            self.push(classes);
        }
        self
    }

    /// Appends every token of another list, preserving its order.
    pub fn extend(&mut self, other: &ClassList) -> &mut Self {
        for token in &other.tokens {
            self.push(token);
        }
        self
    }

    /// Returns `true` when `token` is already present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|existing| existing == token)
    }

    /// Returns `true` when no token has been pushed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        let mut list = Self::new();
        list.push(classes);
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
