/*
 * content.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Content sources.
//!
//! How a field's value becomes markup depends on its type (formatted text,
//! highlighted code, the output of a callback). That work happens before the
//! renderer runs; the renderer only asks a [`ContentSource`] for the result.

use field_template_types::FieldKey;
use indexmap::IndexMap;
use std::borrow::Cow;

/// Produces the rendered content of a field.
pub trait ContentSource {
    /// The content for `key`, or `None` when the field has nothing to show.
    fn content_for(&self, key: &FieldKey) -> Option<Cow<'_, str>>;
}

impl ContentSource for str {
    fn content_for(&self, _key: &FieldKey) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl ContentSource for String {
    fn content_for(&self, _key: &FieldKey) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: ContentSource> ContentSource for Option<T> {
    fn content_for(&self, key: &FieldKey) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|source| source.content_for(key))
    }
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn content_for(&self, key: &FieldKey) -> Option<Cow<'_, str>> {
        (**self).content_for(key)
    }
}

/// Adapts a closure into a [`ContentSource`].
pub struct FnContent<F>(pub F);

impl<F> ContentSource for FnContent<F>
where
    F: Fn(&FieldKey) -> Option<String>,
{
    fn content_for(&self, key: &FieldKey) -> Option<Cow<'_, str>> {
        (self.0)(key).map(Cow::Owned)
    }
}

/// Template variables from an upstream preprocessing step.
///
/// For a field `body` the variable `body_rendered` is preferred over `body`.
/// Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedVars {
    vars: IndexMap<String, String>,
}

impl RenderedVars {
    pub const RENDERED_SUFFIX: &'static str = "_rendered";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenderedVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RenderedVars {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl ContentSource for RenderedVars {
    fn content_for(&self, key: &FieldKey) -> Option<Cow<'_, str>> {
        let rendered = format!("{}{}", key.as_str(), Self::RENDERED_SUFFIX);
        [rendered.as_str(), key.as_str()]
            .into_iter()
            .filter_map(|name| self.get(name))
            .find(|value| !value.is_empty())
            .map(Cow::Borrowed)
    }
}
