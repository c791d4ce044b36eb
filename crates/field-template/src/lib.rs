/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Field template composition.
//!
//! Turns a field's content and its layered display settings into a
//! markup-agnostic [`RenderNode`] tree: an optional label, the content, and
//! up to three nested wrapper elements.
//!
//! # Pipeline
//!
//! 1. [`FieldSettingsResolver`] merges base defaults, type defaults and
//!    instance settings into [`ResolvedFieldSettings`]
//! 2. fields without content stop here and produce nothing
//! 3. [`format_label`] builds the label node
//! 4. [`compose`] nests label and content inside the enabled wrappers
//! 5. [`build_classes`] computes the field-level class list
//!
//! [`FieldRenderer`] runs all of it.
//!
//! # Example
//!
//! ```rust
//! use field_template::{FieldContext, FieldKey, FieldRenderer, SettingsLayers, to_html};
//! use field_template_config::parse_settings;
//!
//! let instance = parse_settings(
//!     "label-format: inline\nlabel-colon: true\nouter:\n  enabled: true\n  class: ow-class\n",
//! )
//! .unwrap();
//!
//! let rendered = FieldRenderer::default()
//!     .render(
//!         &FieldKey::new("body"),
//!         &FieldContext::new("Body"),
//!         SettingsLayers::instance(&instance),
//!         Some("<p>Hello</p>"),
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     to_html(&rendered.root),
//!     r#"<div class="ow-class"><div class="label-inline">Body:</div><p>Hello</p></div>"#
//! );
//! ```

pub mod classes;
pub mod compose;
pub mod content;
pub mod html;
pub mod label;
pub mod render;
pub mod settings;

pub use classes::{build_classes, wrapper_classes};
pub use compose::{SlotDefaults, compose, merge_attributes, wrapper_node};
pub use content::{ContentSource, FnContent, RenderedVars};
pub use html::{escape_html, to_html, write_html};
pub use label::{LabelOptions, format_label, format_label_with, label_text};
pub use render::{FieldContext, FieldRenderer, RenderedField};
pub use settings::{
    BaseDefaults, FieldSettingsResolver, ResolvedFieldSettings, SettingsLayers,
};

// Re-export the data model for convenience
pub use field_template_types::{
    Attributes, Child, ClassList, FieldKey, FieldKind, LabelFormat, RenderNode, WrapperSlot,
    WrapperSpec,
};
