//! Normalization of legacy flat settings keys.
//!
//! Older stored configuration describes wrappers with flat keys such as
//! `ow`, `ow-el` and `fis-cl`. Layers are rewritten into the nested form
//! before merging so that the resolver only ever sees one vocabulary.
//!
//! | legacy       | nested                    |
//! |--------------|---------------------------|
//! | `ow`         | `outer.enabled`           |
//! | `ow-el`      | `outer.tag`               |
//! | `ow-cl`      | `outer.class`             |
//! | `ow-def-cl`  | `outer.default-class`     |
//! | `ow-at`      | `outer.attributes`        |
//! | `ow-def-at`  | `outer.default-attributes`|
//!
//! `fis*` maps to `field-items` and `fi*` to `field-item` the same way.
//! `labelformat` becomes `label-format` and `label_value` becomes `label`.

use crate::types::SettingsValue;
use field_template_types::WrapperSlot;
use indexmap::IndexMap;

fn slot_for_prefix(prefix: &str) -> Option<WrapperSlot> {
    match prefix {
        "ow" => Some(WrapperSlot::Outer),
        "fis" => Some(WrapperSlot::FieldItems),
        "fi" => Some(WrapperSlot::FieldItem),
        _ => None,
    }
}

fn nested_key_for_suffix(suffix: &str) -> Option<&'static str> {
    match suffix {
        "" => Some("enabled"),
        "-el" => Some("tag"),
        "-cl" => Some("class"),
        "-def-cl" => Some("default-class"),
        "-at" => Some("attributes"),
        "-def-at" => Some("default-attributes"),
        _ => None,
    }
}

/// Split a legacy wrapper key into its slot and nested key.
pub fn legacy_wrapper_key(key: &str) -> Option<(WrapperSlot, &'static str)> {
    // "fis" must be tried before "fi".
    for prefix in ["ow", "fis", "fi"] {
        if let Some(suffix) = key.strip_prefix(prefix) {
            if let (Some(slot), Some(nested)) =
                (slot_for_prefix(prefix), nested_key_for_suffix(suffix))
            {
                return Some((slot, nested));
            }
        }
    }
    None
}

fn renamed_top_level_key(key: &str) -> Option<&'static str> {
    match key {
        "labelformat" => Some("label-format"),
        "label_value" => Some("label"),
        _ => None,
    }
}

/// Rewrite legacy keys of a settings layer into the nested vocabulary.
///
/// Returns a new value; the input is never modified. Keys that already use
/// the nested form win over their legacy spelling in the same layer. Layers
/// that are not maps are returned unchanged.
pub fn normalize_legacy_keys(layer: &SettingsValue) -> SettingsValue {
    let Some(entries) = layer.as_map() else {
        return layer.clone();
    };

    let mut out: IndexMap<String, SettingsValue> = IndexMap::new();
    let mut legacy_slots: IndexMap<WrapperSlot, IndexMap<String, SettingsValue>> = IndexMap::new();
    let mut renamed: Vec<(&'static str, SettingsValue)> = Vec::new();

    for (key, value) in entries {
        if let Some((slot, nested)) = legacy_wrapper_key(key) {
            tracing::debug!(key = %key, slot = slot.settings_key(), nested, "Normalizing legacy wrapper key");
            legacy_slots
                .entry(slot)
                .or_default()
                .insert(nested.to_string(), value.clone());
        } else if let Some(new_key) = renamed_top_level_key(key) {
            renamed.push((new_key, value.clone()));
        } else {
            out.insert(key.clone(), value.clone());
        }
    }

    for (new_key, value) in renamed {
        if !out.contains_key(new_key) {
            out.insert(new_key.to_string(), value);
        }
    }

    for (slot, legacy_entries) in legacy_slots {
        let key = slot.settings_key();
        match out.get_mut(key) {
            Some(SettingsValue::Map(existing)) => {
                for (nested, value) in legacy_entries {
                    existing.entry(nested).or_insert(value);
                }
            }
            Some(_) => {
                tracing::warn!(slot = key, "Nested wrapper setting is not a map; ignoring legacy keys");
            }
            None => {
                out.insert(key.to_string(), SettingsValue::Map(legacy_entries));
            }
        }
    }

    SettingsValue::Map(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn s(v: &str) -> SettingsValue {
        SettingsValue::string(v)
    }

    #[test]
    fn test_legacy_wrapper_key() {
        assert_eq!(
            legacy_wrapper_key("ow"),
            Some((WrapperSlot::Outer, "enabled"))
        );
        assert_eq!(
            legacy_wrapper_key("fis-cl"),
            Some((WrapperSlot::FieldItems, "class"))
        );
        assert_eq!(
            legacy_wrapper_key("fi-def-at"),
            Some((WrapperSlot::FieldItem, "default-attributes"))
        );
        assert_eq!(legacy_wrapper_key("fis-unknown"), None);
        assert_eq!(legacy_wrapper_key("label"), None);
    }

    #[test]
    fn test_normalize_expert_settings() {
        let layer = SettingsValue::map([
            ("ow", s("1")),
            ("ow-el", s("div")),
            ("ow-cl", s("ow-class")),
            ("fi", s("1")),
            ("fi-el", s("span")),
            ("fis-at", s("name=\"fis-att\"")),
            ("labelformat", s("inline")),
        ]);

        let expected = SettingsValue::map([
            ("label-format", s("inline")),
            (
                "outer",
                SettingsValue::map([
                    ("enabled", s("1")),
                    ("tag", s("div")),
                    ("class", s("ow-class")),
                ]),
            ),
            (
                "field-item",
                SettingsValue::map([("enabled", s("1")), ("tag", s("span"))]),
            ),
            (
                "field-items",
                SettingsValue::map([("attributes", s("name=\"fis-att\""))]),
            ),
        ]);

        assert_eq!(normalize_legacy_keys(&layer), expected);
    }

    #[test]
    fn test_nested_keys_win_over_legacy() {
        let layer = SettingsValue::map([
            ("ow-cl", s("legacy")),
            ("outer", SettingsValue::map([("class", s("nested"))])),
            ("label_value", s("Old")),
            ("label", s("New")),
        ]);

        let normalized = normalize_legacy_keys(&layer);
        assert_eq!(
            normalized.get("outer").and_then(|o| o.get("class")),
            Some(&s("nested"))
        );
        assert_eq!(normalized.get("label"), Some(&s("New")));
    }

    #[test]
    fn test_normalize_does_not_mutate_input() {
        let layer = SettingsValue::map([("ow", s("1"))]);
        let before = layer.clone();
        let _ = normalize_legacy_keys(&layer);
        assert_eq!(layer, before);
    }

    #[test]
    fn test_non_map_layer_unchanged() {
        assert_eq!(normalize_legacy_keys(&s("x")), s("x"));
    }
}
