//! Layered settings read from YAML: legacy normalization, bounded merging
//! and materialization working together.

use field_template_config::{
    ConfigError, MergedSettings, SettingsValue, attributes_from_value, normalize_legacy_keys,
    parse_settings,
};
use pretty_assertions::assert_eq;

fn layer(yaml: &str) -> SettingsValue {
    normalize_legacy_keys(&parse_settings(yaml).expect("layer should parse"))
}

#[test]
fn legacy_and_nested_layers_merge() {
    let type_defaults = layer("outer:\n  enabled: true\n  tag: section\n  class: type-class\n");
    let instance = layer("ow-cl: ow-class\now-at: 'name=\"ow-att\"'\nlabelformat: above\n");
    let merged = MergedSettings::new(vec![&type_defaults, &instance]);

    let outer = merged.cursor().at("outer");
    assert_eq!(outer.at("tag").as_scalar().and_then(|s| s.value.as_str()), Some("section"));
    assert_eq!(
        outer.at("class").as_scalar().and_then(|s| s.value.as_str()),
        Some("ow-class")
    );

    let attributes = outer.at("attributes").winning().expect("attributes are set");
    let attributes = attributes_from_value(attributes.value).expect("attributes should parse");
    assert_eq!(attributes.get("name").map(String::as_str), Some("ow-att"));

    assert_eq!(
        merged.get_scalar(&["label-format"]).and_then(|s| s.value.as_str()),
        Some("above")
    );
}

#[test]
fn materialized_layers() {
    let type_defaults = layer("fi: '1'\nfi-el: span\nweight: 1\n");
    let instance = layer("field-item:\n  class: fi-class\nweight: 4\n");
    let merged = MergedSettings::new(vec![&type_defaults, &instance]);

    let expected = parse_settings(
        "field-item:\n  enabled: '1'\n  tag: span\n  class: fi-class\nweight: 4\n",
    )
    .expect("expected settings should parse");
    assert_eq!(merged.materialize().expect("layers should materialize"), expected);
}

#[test]
fn boundary_errors() {
    assert!(matches!(
        parse_settings("- a\n"),
        Err(ConfigError::NotAMap { found: "array" })
    ));
    assert!(matches!(
        parse_settings("a: 1\n---\nb: 2\n"),
        Err(ConfigError::MultipleDocuments { count: 2 })
    ));
    assert!(matches!(parse_settings("a: [1\n"), Err(ConfigError::Yaml { .. })));
    assert_eq!(parse_settings("").expect("empty is fine"), SettingsValue::empty_map());
}
