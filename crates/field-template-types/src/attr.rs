/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

use hashlink::LinkedHashMap;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ordered attribute mapping. Keys are unique and the last write wins.
pub type Attributes = LinkedHashMap<String, String>;

pub fn empty_attributes() -> Attributes {
    LinkedHashMap::new()
}

/// An ordered set of CSS class tokens.
///
/// Tokens are trimmed on insertion, blank tokens are dropped and a token that
/// is already present is ignored, so the list keeps first-seen order and never
/// holds duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(IndexSet<String>);

impl ClassList {
    pub fn new() -> Self {
        ClassList(IndexSet::new())
    }

    /// Add a single token. Returns `true` if the token was added.
    pub fn push(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }
        self.0.insert(token.to_string())
    }

    /// Add every whitespace-separated token of `classes`, in order.
    pub fn extend_tokens(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            self.push(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    /// The value of an HTML `class` attribute.
    pub fn to_class_attr(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}

// IndexSet equality ignores order; class lists are compared in order.
impl PartialEq for ClassList {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for ClassList {}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for token in iter {
            list.extend_tokens(token.as_ref());
        }
        list
    }
}
