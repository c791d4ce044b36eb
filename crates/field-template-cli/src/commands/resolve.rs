/*
 * resolve.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Resolve command implementation.
//!
//! Prints the merged settings layers and the typed settings the renderer
//! would use, as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use field_template::{FieldSettingsResolver, SettingsLayers};
use field_template_config::{MergedSettings, SettingsValue, Yaml, normalize_legacy_keys};
use serde_json::{Map, Number, Value, json};

use super::load_layer;
use crate::KindArg;

/// Arguments for the resolve command
#[derive(Debug)]
pub struct ResolveArgs {
    pub kind: KindArg,
    pub type_defaults: Option<PathBuf>,
    pub settings: Option<PathBuf>,
}

/// Execute the resolve command
pub fn execute(args: ResolveArgs) -> Result<()> {
    let report = resolve_report(&args)?;
    let output = serde_json::to_string_pretty(&report).context("Failed to serialize settings")?;
    println!("{output}");
    Ok(())
}

/// Build the `{ "merged": ..., "resolved": ... }` report.
pub fn resolve_report(args: &ResolveArgs) -> Result<Value> {
    let type_defaults = load_layer(args.type_defaults.as_deref())?;
    let instance = load_layer(args.settings.as_deref())?;
    let layers = SettingsLayers::new(type_defaults.as_ref(), instance.as_ref());

    let normalized: Vec<SettingsValue> = layers.iter().map(normalize_legacy_keys).collect();
    let merged = MergedSettings::new(normalized.iter().collect())
        .materialize()
        .context("Failed to merge settings layers")?;

    let resolved = FieldSettingsResolver::default().resolve(args.kind.into(), layers);

    Ok(json!({
        "merged": settings_to_json(&merged),
        "resolved": serde_json::to_value(&resolved).context("Failed to serialize settings")?,
    }))
}

fn settings_to_json(value: &SettingsValue) -> Value {
    match value {
        SettingsValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), settings_to_json(value)))
                .collect::<Map<String, Value>>(),
        ),
        SettingsValue::Array(items) => Value::Array(items.iter().map(settings_to_json).collect()),
        SettingsValue::Scalar(yaml) => match yaml {
            Yaml::String(s) => Value::String(s.clone()),
            Yaml::Integer(i) => Value::Number((*i).into()),
            Yaml::Real(r) => r
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map_or_else(|| Value::String(r.clone()), Value::Number),
            Yaml::Boolean(b) => Value::Bool(*b),
            _ => Value::Null,
        },
    }
}
