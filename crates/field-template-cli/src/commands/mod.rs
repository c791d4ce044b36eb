/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Command implementations for the field-template CLI
//!
//! Each command module handles the CLI interface and delegates to the
//! field-template crates for the actual work.

pub mod render;
pub mod resolve;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use field_template::{FieldKind, SlotDefaults, WrapperSlot};
use field_template_config::{SettingsValue, attributes_from_value, parse_settings};

use crate::KindArg;

impl From<KindArg> for FieldKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Plain => FieldKind::Plain,
            KindArg::Group => FieldKind::Group,
            KindArg::Multigroup => FieldKind::Multigroup,
        }
    }
}

/// Read and parse a YAML settings file.
pub fn load_settings(path: &Path) -> Result<SettingsValue> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    parse_settings(&text)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}

/// Read an optional settings layer.
pub fn load_layer(path: Option<&Path>) -> Result<Option<SettingsValue>> {
    path.map(load_settings).transpose()
}

/// Read per-slot defaults.
///
/// The file maps slot names to a record with optional `class` and
/// `attributes` entries:
///
/// ```yaml
/// outer:
///   class: field-outer
///   attributes:
///     role: group
/// ```
pub fn load_slot_defaults(path: &Path) -> Result<SlotDefaults> {
    let value = load_settings(path)?;
    slot_defaults_from_value(&value)
        .with_context(|| format!("Invalid slot defaults in {}", path.display()))
}

fn slot_defaults_from_value(value: &SettingsValue) -> Result<SlotDefaults> {
    let mut defaults = SlotDefaults::new();
    for slot in WrapperSlot::OUTER_TO_INNER {
        let Some(entry) = value.get(slot.settings_key()) else {
            continue;
        };
        if let Some(class) = entry.get("class").and_then(SettingsValue::to_text) {
            defaults = defaults.with_class(slot, class);
        }
        if let Some(attributes) = entry.get("attributes") {
            let attributes = attributes_from_value(attributes)
                .with_context(|| format!("Invalid attributes for slot {}", slot.settings_key()))?;
            defaults = defaults.with_attributes(slot, attributes);
        }
    }
    Ok(defaults)
}
