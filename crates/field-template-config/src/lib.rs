//! Layered field settings for field templates.
//!
//! This crate provides the infrastructure for reading and merging field
//! settings from several layers (per-type defaults, per-instance stored
//! configuration) before they are resolved into typed settings.
//!
//! # Key Features
//!
//! - **YAML input**: layers are parsed from YAML into [`SettingsValue`] trees
//! - **Bounded merge**: [`MergedSettings`] merges maps key-by-key down to a
//!   fixed depth and takes deeper values whole from the winning layer
//! - **Legacy vocabulary**: flat keys such as `ow-cl` are normalized into
//!   nested wrapper records by [`normalize_legacy_keys`]
//! - **Attribute strings**: `name="x" hidden` is parsed into an ordered map
//!
//! # Example
//!
//! ```rust
//! use field_template_config::{MergedSettings, parse_settings};
//!
//! let type_defaults = parse_settings("label-format: above\n").unwrap();
//! let instance = parse_settings("label: My body\n").unwrap();
//!
//! let merged = MergedSettings::new(vec![&type_defaults, &instance]);
//! let format = merged.get_scalar(&["label-format"]).unwrap();
//! assert_eq!(format.value.as_str(), Some("above"));
//! ```

mod attributes;
mod convert;
mod legacy;
mod materialize;
mod merged;
mod types;

pub use types::{ConfigError, ConfigResult, SettingsValue};

pub use convert::{parse_settings, settings_value_from_yaml};

pub use merged::{MergedCursor, MergedMap, MergedScalar, MergedSettings};

pub use materialize::MaterializeOptions;

pub use legacy::{legacy_wrapper_key, normalize_legacy_keys};

pub use attributes::{attributes_from_value, parse_attribute_string};

// Re-export for convenience
pub use yaml_rust2::Yaml;
