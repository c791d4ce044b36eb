//! Materialization of merged settings into owned values.
//!
//! Converts a lazily-evaluated `MergedSettings` into an owned `SettingsValue`
//! tree, e.g. to print the effective configuration of a field.
//!
//! # Depth Limiting
//!
//! Materialization enforces a maximum depth to prevent stack overflow from
//! deeply nested settings. The default limit is 256 levels.

use crate::merged::{MergedCursor, MergedSettings};
use crate::types::{ConfigError, SettingsValue};
use indexmap::IndexMap;

/// Options for materialization.
#[derive(Debug, Clone)]
pub struct MaterializeOptions {
    /// Maximum nesting depth (default: 256).
    pub max_depth: usize,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

impl<'a> MergedSettings<'a> {
    /// Materialize with default options.
    pub fn materialize(&self) -> Result<SettingsValue, ConfigError> {
        self.materialize_with_options(&MaterializeOptions::default())
    }

    /// Materialize with custom options.
    pub fn materialize_with_options(
        &self,
        options: &MaterializeOptions,
    ) -> Result<SettingsValue, ConfigError> {
        let cursor = self.cursor();
        Ok(materialize_cursor(&cursor, 0, options)?.unwrap_or_else(SettingsValue::empty_map))
    }
}

fn materialize_cursor(
    cursor: &MergedCursor<'_>,
    depth: usize,
    options: &MaterializeOptions,
) -> Result<Option<SettingsValue>, ConfigError> {
    if depth > options.max_depth {
        return Err(ConfigError::NestingTooDeep {
            max_depth: options.max_depth,
            path: cursor.path().to_vec(),
        });
    }

    // The highest-priority layer decides the shape at this path.
    let Some(winning) = cursor.winning() else {
        return Ok(None);
    };

    match winning.value {
        SettingsValue::Map(_) => {
            let Some(map) = cursor.as_map() else {
                return Ok(None);
            };
            let mut entries = IndexMap::new();
            for (key, child) in map.iter() {
                if let Some(value) = materialize_cursor(&child, depth + 1, options)? {
                    entries.insert(key.to_string(), value);
                }
            }
            Ok(Some(SettingsValue::Map(entries)))
        }
        other => Ok(Some(other.clone())),
    }
}
