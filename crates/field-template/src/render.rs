/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The field renderer.
//!
//! Runs the pipeline for one field: resolve settings, skip empty fields,
//! format the label, compose the wrappers and compute the field's own class
//! list. Every call is independent; the renderer holds no mutable state.

use crate::classes::build_classes;
use crate::compose::{SlotDefaults, compose};
use crate::content::ContentSource;
use crate::html::to_html;
use crate::label::{LabelOptions, format_label_with};
use crate::settings::{FieldSettingsResolver, ResolvedFieldSettings, SettingsLayers};
use field_template_types::{Child, ClassList, FieldKey, FieldKind, RenderNode};
use serde::Serialize;

/// What the collaborator knows about a field besides its settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldContext {
    /// Human-readable name, used as label text when no custom label is set.
    pub name: String,
    pub kind: FieldKind,
    /// Extra classes for the field-level class list.
    pub type_classes: Vec<String>,
    pub slot_defaults: SlotDefaults,
}

impl FieldContext {
    pub fn new(name: impl Into<String>) -> Self {
        FieldContext {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_type_class(mut self, class: impl Into<String>) -> Self {
        self.type_classes.push(class.into());
        self
    }

    pub fn with_slot_defaults(mut self, slot_defaults: SlotDefaults) -> Self {
        self.slot_defaults = slot_defaults;
        self
    }

    fn class_fragments(&self) -> Vec<&str> {
        self.kind
            .type_classes()
            .iter()
            .copied()
            .chain(self.type_classes.iter().map(String::as_str))
            .collect()
    }
}

/// A rendered field, ready for the collaborator's outer template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedField {
    pub key: FieldKey,
    /// Classes for the field as a whole, starting with `field-<key>`.
    pub classes: ClassList,
    pub theme: String,
    pub weight: i64,
    pub root: RenderNode,
}

impl RenderedField {
    pub fn to_html(&self) -> String {
        to_html(&self.root)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldRenderer {
    resolver: FieldSettingsResolver,
    label_options: LabelOptions,
}

impl FieldRenderer {
    pub fn new(resolver: FieldSettingsResolver) -> Self {
        FieldRenderer {
            resolver,
            label_options: LabelOptions::default(),
        }
    }

    pub fn with_label_options(mut self, label_options: LabelOptions) -> Self {
        self.label_options = label_options;
        self
    }

    pub fn resolver(&self) -> &FieldSettingsResolver {
        &self.resolver
    }

    /// Render a field.
    ///
    /// Returns `None` when `content` is absent or empty; no wrapper structure
    /// is built for such fields.
    pub fn render(
        &self,
        key: &FieldKey,
        context: &FieldContext,
        layers: SettingsLayers<'_>,
        content: Option<&str>,
    ) -> Option<RenderedField> {
        let settings = self
            .resolver
            .resolve(context.kind, layers)
            .with_content(content);
        self.render_resolved(key, context, &settings)
    }

    /// Render a field, asking `source` for its content.
    pub fn render_from<S: ContentSource + ?Sized>(
        &self,
        key: &FieldKey,
        context: &FieldContext,
        layers: SettingsLayers<'_>,
        source: &S,
    ) -> Option<RenderedField> {
        let content = source.content_for(key);
        self.render(key, context, layers, content.as_deref())
    }

    /// Render a field from settings that were already resolved.
    pub fn render_resolved(
        &self,
        key: &FieldKey,
        context: &FieldContext,
        settings: &ResolvedFieldSettings<'_>,
    ) -> Option<RenderedField> {
        let Some(content) = settings.content.filter(|content| !content.is_empty()) else {
            tracing::debug!(field = %key, "Field has no content, skipping");
            return None;
        };

        let label = format_label_with(
            &self.label_options,
            settings.label_format,
            &settings.label_text,
            &context.name,
            settings.label_colon,
        );
        let root = compose(
            settings,
            label,
            Child::Content(content.to_string()),
            &context.slot_defaults,
        );
        let classes = build_classes(
            Some(key),
            settings.css_class.as_deref(),
            &context.class_fragments(),
            true,
        );

        tracing::debug!(
            field = %key,
            label_format = settings.label_format.as_str(),
            wrappers = settings.enabled_slots().len(),
            "Rendered field"
        );

        Some(RenderedField {
            key: key.clone(),
            classes,
            theme: settings.theme.clone(),
            weight: settings.weight,
            root,
        })
    }
}
