/*
 * wrapper.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::{Attributes, empty_attributes};
use serde::{Deserialize, Serialize};

/// Element used for an enabled wrapper that does not name one.
pub const DEFAULT_WRAPPER_TAG: &str = "div";

/// One of the three concentric wrapper levels around a field.
///
/// Nesting is always outer ⊇ field items ⊇ field item ⊇ (label, content).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WrapperSlot {
    Outer,
    FieldItems,
    FieldItem,
}

impl WrapperSlot {
    /// All slots, outermost first.
    pub const OUTER_TO_INNER: [WrapperSlot; 3] = [
        WrapperSlot::Outer,
        WrapperSlot::FieldItems,
        WrapperSlot::FieldItem,
    ];

    /// All slots, innermost first (the order wrappers are applied in).
    pub const INNER_TO_OUTER: [WrapperSlot; 3] = [
        WrapperSlot::FieldItem,
        WrapperSlot::FieldItems,
        WrapperSlot::Outer,
    ];

    /// Key of the slot's sub-record in settings layers.
    pub fn settings_key(&self) -> &'static str {
        match self {
            WrapperSlot::Outer => "outer",
            WrapperSlot::FieldItems => "field-items",
            WrapperSlot::FieldItem => "field-item",
        }
    }
}

/// Configuration of a single wrapper slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrapperSpec {
    pub enabled: bool,
    pub tag: String,
    pub css_class: Option<String>,
    /// Append the collaborator's default class for this slot, even when
    /// `css_class` is set.
    pub use_default_class: bool,
    pub attributes: Attributes,
    /// Append the collaborator's default attribute set for this slot.
    pub use_default_attributes: bool,
}

impl Default for WrapperSpec {
    fn default() -> Self {
        WrapperSpec {
            enabled: false,
            tag: DEFAULT_WRAPPER_TAG.to_string(),
            css_class: None,
            use_default_class: false,
            attributes: empty_attributes(),
            use_default_attributes: false,
        }
    }
}

impl WrapperSpec {
    /// An enabled wrapper with the given element.
    pub fn enabled(tag: impl Into<String>) -> Self {
        WrapperSpec {
            enabled: true,
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}
