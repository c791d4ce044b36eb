/*
 * field.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a field, e.g. `body` or `field_tags`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn new(key: impl Into<String>) -> Self {
        FieldKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The class every field carries on its own class list:
    /// `field-<key>` with underscores replaced by hyphens.
    pub fn default_class(&self) -> String {
        format!("field-{}", self.0.replace('_', "-"))
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldKey {
    fn from(key: &str) -> Self {
        FieldKey(key.to_string())
    }
}

impl From<String> for FieldKey {
    fn from(key: String) -> Self {
        FieldKey(key)
    }
}

/// How a field's label is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    /// No label node is emitted.
    #[default]
    Hidden,
    /// Label rendered as a block preceding the content.
    Above,
    /// Label rendered inline before the content, optionally with a colon.
    Inline,
}

impl LabelFormat {
    /// Look up a format by its settings name (case-insensitive).
    ///
    /// Returns `None` for unknown names; callers decide the fallback.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "hidden" => Some(LabelFormat::Hidden),
            "above" => Some(LabelFormat::Above),
            "inline" => Some(LabelFormat::Inline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelFormat::Hidden => "hidden",
            LabelFormat::Above => "above",
            LabelFormat::Inline => "inline",
        }
    }
}

/// The kind of field being rendered.
///
/// Groups bundle other fields; the kind only affects the field-level
/// classes and the default theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Plain,
    Group,
    Multigroup,
}

impl FieldKind {
    pub fn is_group(&self) -> bool {
        matches!(self, FieldKind::Group | FieldKind::Multigroup)
    }

    /// Classes the kind contributes to the field-level class list.
    pub fn type_classes(&self) -> &'static [&'static str] {
        match self {
            FieldKind::Plain => &[],
            FieldKind::Group => &["field-group"],
            FieldKind::Multigroup => &["field-multigroup"],
        }
    }
}
