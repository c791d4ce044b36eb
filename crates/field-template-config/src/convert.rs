//! Conversion from YAML to `SettingsValue`.
//!
//! Stored field settings arrive as YAML documents. This module parses them and
//! converts the resulting `Yaml` tree into a `SettingsValue` tree.

use crate::types::{ConfigError, ConfigResult, SettingsValue};
use indexmap::IndexMap;
use yaml_rust2::{Yaml, YamlLoader};

/// Convert a parsed `Yaml` value to a `SettingsValue`.
///
/// Hash entries whose keys are strings or integers are kept (integer keys are
/// stringified); entries with any other key type are dropped.
pub fn settings_value_from_yaml(yaml: Yaml) -> SettingsValue {
    match yaml {
        Yaml::Array(items) => {
            SettingsValue::Array(items.into_iter().map(settings_value_from_yaml).collect())
        }
        Yaml::Hash(hash) => {
            let mut entries = IndexMap::new();
            for (key, value) in hash {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Integer(i) => i.to_string(),
                    other => {
                        tracing::warn!(key = ?other, "Ignoring settings entry with non-string key");
                        continue;
                    }
                };
                entries.insert(key, settings_value_from_yaml(value));
            }
            SettingsValue::Map(entries)
        }
        scalar => SettingsValue::Scalar(scalar),
    }
}

/// Parse a settings layer from YAML text.
///
/// An empty document (or one holding only `null`) is an empty layer. The root
/// of a non-empty document must be a map.
pub fn parse_settings(text: &str) -> ConfigResult<SettingsValue> {
    let mut docs = YamlLoader::load_from_str(text)?;
    if docs.len() > 1 {
        return Err(ConfigError::MultipleDocuments { count: docs.len() });
    }

    let value = match docs.pop() {
        Some(doc) => settings_value_from_yaml(doc),
        None => return Ok(SettingsValue::empty_map()),
    };

    match value {
        SettingsValue::Map(_) => Ok(value),
        v if v.is_null() => Ok(SettingsValue::empty_map()),
        v => Err(ConfigError::NotAMap {
            found: v.kind_name(),
        }),
    }
}
