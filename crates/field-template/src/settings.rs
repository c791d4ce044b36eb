/*
 * settings.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Cascading resolution of field settings.
//!
//! Effective settings come from three layers, lowest priority first:
//!
//! 1. [`BaseDefaults`]: constants shared by every field
//! 2. per-type defaults supplied by the collaborator
//! 3. the stored settings of this field instance
//!
//! Later layers override earlier ones key-by-key; wrapper sub-records
//! (`outer`, `field-items`, `field-item`) merge one level deep. Resolution
//! is total: a key no layer sets falls back to its base default.

use field_template_config::{
    MergedCursor, MergedSettings, SettingsValue, attributes_from_value, normalize_legacy_keys,
};
use field_template_types::{DEFAULT_WRAPPER_TAG, FieldKind, LabelFormat, WrapperSlot, WrapperSpec};
use serde::Serialize;

pub const DEFAULT_THEME: &str = "field";
pub const DEFAULT_GROUP_THEME: &str = "fieldset";

/// Settings every field starts from, regardless of its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDefaults {
    pub label_format: LabelFormat,
    pub label: String,
    pub label_colon: bool,
    pub theme: String,
    /// Theme used instead of `theme` for group fields.
    pub group_theme: String,
    pub weight: i64,
}

impl Default for BaseDefaults {
    fn default() -> Self {
        BaseDefaults {
            label_format: LabelFormat::Hidden,
            label: String::new(),
            label_colon: false,
            theme: DEFAULT_THEME.to_string(),
            group_theme: DEFAULT_GROUP_THEME.to_string(),
            weight: 0,
        }
    }
}

/// The collaborator-supplied settings layers for one field.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsLayers<'a> {
    pub type_defaults: Option<&'a SettingsValue>,
    pub instance: Option<&'a SettingsValue>,
}

impl<'a> SettingsLayers<'a> {
    pub fn new(type_defaults: Option<&'a SettingsValue>, instance: Option<&'a SettingsValue>) -> Self {
        SettingsLayers {
            type_defaults,
            instance,
        }
    }

    pub fn instance(instance: &'a SettingsValue) -> Self {
        SettingsLayers {
            type_defaults: None,
            instance: Some(instance),
        }
    }

    /// Present layers, lowest priority first.
    pub fn iter(&self) -> impl Iterator<Item = &'a SettingsValue> {
        [self.type_defaults, self.instance].into_iter().flatten()
    }
}

/// Effective settings of one field instance.
///
/// Built fresh for every render and never mutated afterwards. The content is
/// borrowed from the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFieldSettings<'c> {
    pub label_format: LabelFormat,
    /// Custom label text; empty means "use the field's default name".
    pub label_text: String,
    pub label_colon: bool,
    pub css_class: Option<String>,
    pub theme: String,
    pub weight: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'c str>,
    pub outer: WrapperSpec,
    pub field_items: WrapperSpec,
    pub field_item: WrapperSpec,
}

impl<'c> ResolvedFieldSettings<'c> {
    pub fn wrapper(&self, slot: WrapperSlot) -> &WrapperSpec {
        match slot {
            WrapperSlot::Outer => &self.outer,
            WrapperSlot::FieldItems => &self.field_items,
            WrapperSlot::FieldItem => &self.field_item,
        }
    }

    /// Enabled slots, outermost first.
    pub fn enabled_slots(&self) -> Vec<WrapperSlot> {
        WrapperSlot::OUTER_TO_INNER
            .into_iter()
            .filter(|slot| self.wrapper(*slot).enabled)
            .collect()
    }

    /// The same settings referring to `content`.
    pub fn with_content<'d>(self, content: Option<&'d str>) -> ResolvedFieldSettings<'d> {
        ResolvedFieldSettings {
            label_format: self.label_format,
            label_text: self.label_text,
            label_colon: self.label_colon,
            css_class: self.css_class,
            theme: self.theme,
            weight: self.weight,
            content,
            outer: self.outer,
            field_items: self.field_items,
            field_item: self.field_item,
        }
    }
}

/// Merges settings layers into [`ResolvedFieldSettings`].
#[derive(Debug, Clone, Default)]
pub struct FieldSettingsResolver {
    base: BaseDefaults,
}

impl FieldSettingsResolver {
    pub fn new(base: BaseDefaults) -> Self {
        FieldSettingsResolver { base }
    }

    pub fn base(&self) -> &BaseDefaults {
        &self.base
    }

    /// Resolve the effective settings of a field.
    ///
    /// The returned settings carry no content; attach it with
    /// [`ResolvedFieldSettings::with_content`].
    pub fn resolve<'c>(
        &self,
        kind: FieldKind,
        layers: SettingsLayers<'_>,
    ) -> ResolvedFieldSettings<'c> {
        let normalized: Vec<SettingsValue> = layers.iter().map(normalize_legacy_keys).collect();
        let merged = MergedSettings::new(normalized.iter().collect());
        let root = merged.cursor();

        // Any set value that is not a known format name hides the label.
        let label_format = match root.at("label-format").winning() {
            Some(winning) if !winning.value.is_null() => winning
                .value
                .as_str()
                .and_then(LabelFormat::from_name)
                .unwrap_or_else(|| {
                    tracing::warn!(
                        found = winning.value.kind_name(),
                        layer = winning.layer_index,
                        "Unknown label format, using hidden"
                    );
                    LabelFormat::Hidden
                }),
            _ => self.base.label_format,
        };

        let default_theme = if kind.is_group() {
            &self.base.group_theme
        } else {
            &self.base.theme
        };
        let theme = read(&root.at("theme"), "string", SettingsValue::to_text)
            .filter(|theme| !theme.trim().is_empty())
            .unwrap_or_else(|| default_theme.clone());

        let settings = ResolvedFieldSettings {
            label_format,
            label_text: read(&root.at("label"), "string", SettingsValue::to_text)
                .unwrap_or_else(|| self.base.label.clone()),
            label_colon: read(&root.at("label-colon"), "flag", SettingsValue::as_flag)
                .unwrap_or(self.base.label_colon),
            css_class: read(&root.at("css-class"), "class list", class_text)
                .filter(|class| !class.trim().is_empty()),
            theme,
            weight: read(&root.at("weight"), "integer", SettingsValue::as_i64)
                .unwrap_or(self.base.weight),
            content: None,
            outer: resolve_wrapper(&root, WrapperSlot::Outer),
            field_items: resolve_wrapper(&root, WrapperSlot::FieldItems),
            field_item: resolve_wrapper(&root, WrapperSlot::FieldItem),
        };

        tracing::debug!(
            label_format = settings.label_format.as_str(),
            theme = %settings.theme,
            layers = merged.layer_count(),
            "Resolved field settings"
        );
        settings
    }
}

/// Read the winning value at `cursor`, converting it with `convert`.
///
/// Absent and null values yield `None` silently; values of the wrong shape
/// yield `None` with a warning.
fn read<T>(
    cursor: &MergedCursor<'_>,
    expected: &str,
    convert: impl Fn(&SettingsValue) -> Option<T>,
) -> Option<T> {
    let winning = cursor.winning()?;
    if winning.value.is_null() {
        return None;
    }
    let converted = convert(winning.value);
    if converted.is_none() {
        tracing::warn!(
            setting = %cursor.path().join("."),
            expected,
            found = winning.value.kind_name(),
            layer = winning.layer_index,
            "Ignoring malformed field setting"
        );
    }
    converted
}

/// A class setting is either a space-separated string or a list of strings.
fn class_text(value: &SettingsValue) -> Option<String> {
    match value {
        SettingsValue::Array(items) => {
            let tokens: Option<Vec<String>> = items.iter().map(SettingsValue::to_text).collect();
            tokens.map(|tokens| tokens.join(" "))
        }
        other => other.to_text(),
    }
}

fn resolve_wrapper(root: &MergedCursor<'_>, slot: WrapperSlot) -> WrapperSpec {
    let cursor = root.at(slot.settings_key());
    let mut spec = WrapperSpec::default();

    match read(&cursor, "map", |v| v.as_map().map(|_| ())) {
        Some(()) => {}
        None => return spec,
    }

    if let Some(enabled) = read(&cursor.at("enabled"), "flag", SettingsValue::as_flag) {
        spec.enabled = enabled;
    }
    if let Some(tag) = read(&cursor.at("tag"), "string", SettingsValue::to_text) {
        let tag = tag.trim();
        spec.tag = if tag.is_empty() {
            DEFAULT_WRAPPER_TAG.to_string()
        } else {
            tag.to_string()
        };
    }
    spec.css_class =
        read(&cursor.at("class"), "class list", class_text).filter(|class| !class.trim().is_empty());
    if let Some(flag) = read(&cursor.at("default-class"), "flag", SettingsValue::as_flag) {
        spec.use_default_class = flag;
    }
    if let Some(attributes) = read(&cursor.at("attributes"), "attributes", |v| {
        attributes_from_value(v)
            .map_err(|err| tracing::warn!(slot = slot.settings_key(), error = %err, "Invalid wrapper attributes"))
            .ok()
    }) {
        spec.attributes = attributes;
    }
    if let Some(flag) = read(&cursor.at("default-attributes"), "flag", SettingsValue::as_flag) {
        spec.use_default_attributes = flag;
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_template_config::parse_settings;
    use pretty_assertions::assert_eq;

    fn resolve(type_yaml: &str, instance_yaml: &str) -> ResolvedFieldSettings<'static> {
        let type_defaults = parse_settings(type_yaml).unwrap();
        let instance = parse_settings(instance_yaml).unwrap();
        FieldSettingsResolver::default().resolve(
            FieldKind::Plain,
            SettingsLayers::new(Some(&type_defaults), Some(&instance)),
        )
    }

    #[test]
    fn test_no_layers_gives_base_defaults() {
        let settings = FieldSettingsResolver::default()
            .resolve(FieldKind::Plain, SettingsLayers::default());
        assert_eq!(settings.label_format, LabelFormat::Hidden);
        assert_eq!(settings.label_text, "");
        assert!(!settings.label_colon);
        assert_eq!(settings.theme, "field");
        assert_eq!(settings.weight, 0);
        assert_eq!(settings.content, None);
        assert!(settings.enabled_slots().is_empty());
    }

    #[test]
    fn test_instance_wins_over_type() {
        let settings = resolve(
            "label-format: above\nlabel: Type label\nweight: 3\n",
            "label: My body\n",
        );
        assert_eq!(settings.label_format, LabelFormat::Above);
        assert_eq!(settings.label_text, "My body");
        assert_eq!(settings.weight, 3);
    }

    #[test]
    fn test_injected_base_defaults() {
        let resolver = FieldSettingsResolver::new(BaseDefaults {
            label_format: LabelFormat::Inline,
            weight: 10,
            ..Default::default()
        });
        let settings = resolver.resolve(FieldKind::Plain, SettingsLayers::default());
        assert_eq!(settings.label_format, LabelFormat::Inline);
        assert_eq!(settings.weight, 10);
    }

    #[test]
    fn test_unknown_label_format_is_hidden() {
        let resolver = FieldSettingsResolver::new(BaseDefaults {
            label_format: LabelFormat::Above,
            ..Default::default()
        });
        let instance = parse_settings("label-format: sideways\n").unwrap();
        let settings = resolver.resolve(FieldKind::Plain, SettingsLayers::instance(&instance));
        assert_eq!(settings.label_format, LabelFormat::Hidden);
    }

    #[test]
    fn test_non_string_label_format_is_hidden() {
        let resolver = FieldSettingsResolver::new(BaseDefaults {
            label_format: LabelFormat::Above,
            ..Default::default()
        });
        for yaml in ["label-format: true\n", "label-format: [above]\n"] {
            let instance = parse_settings(yaml).unwrap();
            let settings = resolver.resolve(FieldKind::Plain, SettingsLayers::instance(&instance));
            assert_eq!(settings.label_format, LabelFormat::Hidden, "{yaml}");
        }

        let instance = parse_settings("label-format: ~\n").unwrap();
        let settings = resolver.resolve(FieldKind::Plain, SettingsLayers::instance(&instance));
        assert_eq!(settings.label_format, LabelFormat::Above);
    }

    #[test]
    fn test_null_overrides_lower_layers() {
        let settings = resolve(
            "label: Type label\nouter:\n  enabled: true\n",
            "label: ~\nouter: ~\n",
        );
        assert_eq!(settings.label_text, "");
        assert!(!settings.outer.enabled);
    }

    #[test]
    fn test_group_theme_default() {
        let resolver = FieldSettingsResolver::default();
        let settings = resolver.resolve(FieldKind::Group, SettingsLayers::default());
        assert_eq!(settings.theme, "fieldset");

        let instance = parse_settings("theme: expert\n").unwrap();
        let settings = resolver.resolve(FieldKind::Multigroup, SettingsLayers::instance(&instance));
        assert_eq!(settings.theme, "expert");
    }

    #[test]
    fn test_empty_theme_falls_back() {
        let settings = resolve("theme: expert\n", "theme: ''\n");
        assert_eq!(settings.theme, "field");
    }

    #[test]
    fn test_wrapper_sub_record_merges_one_level() {
        let settings = resolve(
            "outer:\n  enabled: true\n  tag: span\n  class: type-class\n",
            "outer:\n  class: ow-class\n",
        );
        assert_eq!(
            settings.outer,
            WrapperSpec::enabled("span").with_class("ow-class")
        );
        assert!(!settings.field_items.enabled);
    }

    #[test]
    fn test_attributes_taken_whole_from_winning_layer() {
        let settings = resolve(
            "outer:\n  enabled: 1\n  attributes:\n    name: ow-att\n    role: main\n",
            "outer:\n  attributes: ''\n",
        );
        assert!(settings.outer.enabled);
        assert!(settings.outer.attributes.is_empty());
    }

    #[test]
    fn test_legacy_keys_resolve() {
        let settings = resolve(
            "",
            "ow: '1'\now-el: div\now-cl: ow-class\now-at: 'name=\"ow-att\"'\nfi: '1'\nfi-el: span\nfi-cl: fi-class\now-def-at: '1'\n",
        );
        assert!(settings.outer.enabled);
        assert_eq!(settings.outer.css_class.as_deref(), Some("ow-class"));
        assert_eq!(
            settings.outer.attributes.get("name").map(String::as_str),
            Some("ow-att")
        );
        assert!(settings.outer.use_default_attributes);
        assert_eq!(settings.field_item.tag, "span");
        assert_eq!(
            settings.enabled_slots(),
            vec![WrapperSlot::Outer, WrapperSlot::FieldItem]
        );
    }

    #[test]
    fn test_empty_tag_is_div() {
        let settings = resolve("", "field-items:\n  enabled: true\n  tag: ''\n");
        assert_eq!(settings.field_items.tag, "div");
    }

    #[test]
    fn test_malformed_values_fall_back_to_base() {
        let settings = resolve(
            "label: Type label\nweight: 4\n",
            "label:\n  nested: map\nweight: heavy\nouter: none\n",
        );
        assert_eq!(settings.label_text, "");
        assert_eq!(settings.weight, 0);
        assert!(!settings.outer.enabled);
    }

    #[test]
    fn test_class_lists_accept_arrays() {
        let settings = resolve("", "css-class: [a, b]\nouter:\n  class: [x, y]\n");
        assert_eq!(settings.css_class.as_deref(), Some("a b"));
        assert_eq!(settings.outer.css_class.as_deref(), Some("x y"));
    }

    #[test]
    fn test_resolution_is_repeatable_and_pure() {
        let instance = parse_settings("ow: '1'\nlabel: My body\n").unwrap();
        let before = instance.clone();
        let resolver = FieldSettingsResolver::default();
        let first = resolver.resolve(FieldKind::Plain, SettingsLayers::instance(&instance));
        let second = resolver.resolve(FieldKind::Plain, SettingsLayers::instance(&instance));
        assert_eq!(first, second);
        assert_eq!(instance, before);
    }

    #[test]
    fn test_with_content_borrows() {
        let content = String::from("<p>Hello</p>");
        let settings = FieldSettingsResolver::default()
            .resolve(FieldKind::Plain, SettingsLayers::default())
            .with_content(Some(&content));
        assert_eq!(settings.content, Some("<p>Hello</p>"));
    }
}
