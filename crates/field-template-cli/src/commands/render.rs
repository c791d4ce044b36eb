/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! Renders one field from its settings layers and content, printing either
//! HTML or the JSON render tree. A field without content prints nothing.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use field_template::{
    BaseDefaults, FieldContext, FieldKey, FieldRenderer, FieldSettingsResolver, LabelOptions,
    RenderedField, SettingsLayers, SlotDefaults,
};
use tracing::info;

use super::{load_layer, load_slot_defaults};
use crate::{KindArg, OutputFormat};

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    pub key: String,
    pub name: Option<String>,
    pub kind: KindArg,
    pub type_defaults: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub content: Option<String>,
    pub content_file: Option<PathBuf>,
    pub slot_defaults: Option<PathBuf>,
    pub label_class_prefix: String,
    pub to: OutputFormat,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    if let Some(output) = render_to_string(&args)? {
        println!("{output}");
    }
    Ok(())
}

/// Render the field and serialize it in the requested format.
///
/// Returns `None` when the field has no content.
pub fn render_to_string(args: &RenderArgs) -> Result<Option<String>> {
    let Some(rendered) = render_field(args)? else {
        info!(field = %args.key, "Field has no content, nothing to render");
        return Ok(None);
    };

    let output = match args.to {
        OutputFormat::Html => rendered.to_html(),
        OutputFormat::Json => serde_json::to_string_pretty(&rendered)
            .context("Failed to serialize render tree")?,
    };
    Ok(Some(output))
}

fn render_field(args: &RenderArgs) -> Result<Option<RenderedField>> {
    let type_defaults = load_layer(args.type_defaults.as_deref())?;
    let instance = load_layer(args.settings.as_deref())?;

    let content = match (&args.content, &args.content_file) {
        (Some(content), _) => Some(content.clone()),
        (None, Some(path)) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read content file: {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let slot_defaults = match &args.slot_defaults {
        Some(path) => load_slot_defaults(path)?,
        None => SlotDefaults::new(),
    };

    let key = FieldKey::new(args.key.as_str());
    let name = args.name.clone().unwrap_or_else(|| args.key.clone());
    let context = FieldContext::new(name)
        .with_kind(args.kind.into())
        .with_slot_defaults(slot_defaults);

    let renderer = FieldRenderer::new(FieldSettingsResolver::new(BaseDefaults::default()))
        .with_label_options(LabelOptions::with_class_prefix(args.label_class_prefix.as_str()));

    Ok(renderer.render(
        &key,
        &context,
        SettingsLayers::new(type_defaults.as_ref(), instance.as_ref()),
        content.as_deref().map(str::trim_end),
    ))
}
