//! Core type definitions for field settings layers.

use indexmap::IndexMap;
use thiserror::Error;
use yaml_rust2::Yaml;

/// A raw settings value, as stored by the collaborator.
///
/// This mirrors YAML value types. Maps keep their insertion order so that
/// ordered data such as attribute mappings survive conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsValue {
    /// Atomic values (String, Integer, Real, Boolean, Null).
    ///
    /// Always "last wins" when layers are merged.
    Scalar(Yaml),

    /// Arrays are never merged; the highest-priority layer wins.
    Array(Vec<SettingsValue>),

    /// Maps merge key-by-key up to the configured merge depth.
    Map(IndexMap<String, SettingsValue>),
}

impl SettingsValue {
    pub fn string(s: impl Into<String>) -> Self {
        SettingsValue::Scalar(Yaml::String(s.into()))
    }

    pub fn bool(b: bool) -> Self {
        SettingsValue::Scalar(Yaml::Boolean(b))
    }

    pub fn int(i: i64) -> Self {
        SettingsValue::Scalar(Yaml::Integer(i))
    }

    pub fn null() -> Self {
        SettingsValue::Scalar(Yaml::Null)
    }

    pub fn empty_map() -> Self {
        SettingsValue::Map(IndexMap::new())
    }

    /// Build a map from `(key, value)` pairs.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, SettingsValue)>) -> Self {
        SettingsValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, SettingsValue::Scalar(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, SettingsValue::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, SettingsValue::Map(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SettingsValue::Scalar(Yaml::Null))
    }

    /// Short name of the value's shape, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SettingsValue::Scalar(Yaml::Null) => "null",
            SettingsValue::Scalar(_) => "scalar",
            SettingsValue::Array(_) => "array",
            SettingsValue::Map(_) => "map",
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, SettingsValue>> {
        match self {
            SettingsValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key if this is a map.
    pub fn get(&self, key: &str) -> Option<&SettingsValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingsValue::Scalar(Yaml::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Read a scalar as text. Numbers are accepted and formatted;
    /// booleans, nulls and collections are not.
    pub fn to_text(&self) -> Option<String> {
        match self {
            SettingsValue::Scalar(Yaml::String(s)) => Some(s.clone()),
            SettingsValue::Scalar(Yaml::Integer(i)) => Some(i.to_string()),
            SettingsValue::Scalar(Yaml::Real(r)) => Some(r.clone()),
            _ => None,
        }
    }

    /// Read a scalar as a flag.
    ///
    /// Booleans are taken as-is, integers are true when non-zero and the
    /// strings `1`, `true`, `yes` and `on` (any case) are true. Any other
    /// scalar is false. Nulls and collections are not flags.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            SettingsValue::Scalar(Yaml::Boolean(b)) => Some(*b),
            SettingsValue::Scalar(Yaml::Integer(i)) => Some(*i != 0),
            SettingsValue::Scalar(Yaml::String(s)) => Some(matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )),
            SettingsValue::Scalar(Yaml::Real(_)) => Some(false),
            _ => None,
        }
    }

    /// Read a scalar as an integer. Numeric strings are accepted.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SettingsValue::Scalar(Yaml::Integer(i)) => Some(*i),
            SettingsValue::Scalar(Yaml::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Errors that can occur while reading settings layers.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The YAML text could not be parsed.
    #[error("YAML parse error: {message}")]
    Yaml { message: String },

    /// A settings document whose root is not a map.
    #[error("Settings document must be a map, found {found}")]
    NotAMap { found: &'static str },

    /// More than one YAML document in a single settings input.
    #[error("Settings input contains {count} YAML documents, expected one")]
    MultipleDocuments { count: usize },

    /// Settings nesting exceeds maximum depth.
    #[error("Settings nesting too deep (max depth: {max_depth}) at path: {}", path.join("."))]
    NestingTooDeep {
        /// Maximum allowed depth
        max_depth: usize,
        /// Path where the limit was exceeded
        path: Vec<String>,
    },

    /// An attribute string that could not be parsed.
    #[error("Invalid attributes {input:?}: {message}")]
    InvalidAttributes { input: String, message: String },
}

impl From<yaml_rust2::ScanError> for ConfigError {
    fn from(err: yaml_rust2::ScanError) -> Self {
        ConfigError::Yaml {
            message: err.to_string(),
        }
    }
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
