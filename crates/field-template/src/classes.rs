/*
 * classes.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Class list assembly for fields and wrapper slots.

use field_template_types::{ClassList, FieldKey, WrapperSpec};

/// Build an ordered, de-duplicated class list.
///
/// Tokens are emitted in this order:
///
/// 1. the field's default class (`field-<key>`), when a key is given
/// 2. every token of `explicit_class`
/// 3. every token of `default_class_fragments`, when `use_default_class`
///
/// Blank tokens are dropped and a token seen twice keeps its first position.
pub fn build_classes<S: AsRef<str>>(
    field_key: Option<&FieldKey>,
    explicit_class: Option<&str>,
    default_class_fragments: &[S],
    use_default_class: bool,
) -> ClassList {
    let mut classes = ClassList::new();
    if let Some(key) = field_key {
        classes.push(&key.default_class());
    }
    if let Some(explicit) = explicit_class {
        classes.extend_tokens(explicit);
    }
    if use_default_class {
        for fragment in default_class_fragments {
            classes.extend_tokens(fragment.as_ref());
        }
    }
    classes
}

/// Classes for a wrapper element.
///
/// Wrapper slots never receive the field's default class; `default_class` is
/// the slot's own token, added when `use_default_class` is set.
pub fn wrapper_classes(spec: &WrapperSpec, default_class: Option<&str>) -> ClassList {
    build_classes(
        None,
        spec.css_class.as_deref(),
        default_class.as_slice(),
        spec.use_default_class,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(classes: &ClassList) -> Vec<&str> {
        classes.iter().collect()
    }

    #[test]
    fn test_key_then_explicit() {
        let key = FieldKey::new("body");
        let classes = build_classes::<&str>(Some(&key), Some("a b"), &[], true);
        assert_eq!(tokens(&classes), vec!["field-body", "a", "b"]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let classes = build_classes(None, Some("a  a b "), &["b c"], true);
        assert_eq!(tokens(&classes), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_default_fragments_need_flag() {
        let classes = build_classes(None, Some("a"), &["x"], false);
        assert_eq!(tokens(&classes), vec!["a"]);
    }

    #[test]
    fn test_empty_inputs_give_empty_list() {
        let classes = build_classes::<&str>(None, Some("   "), &[], false);
        assert!(classes.is_empty());
        assert_eq!(classes.to_class_attr(), "");
    }

    #[test]
    fn test_key_with_underscores() {
        let key = FieldKey::new("field_image");
        let classes = build_classes::<String>(Some(&key), None, &[], true);
        assert_eq!(tokens(&classes), vec!["field-field-image"]);
    }

    #[test]
    fn test_wrapper_classes() {
        let mut spec = WrapperSpec::enabled("div").with_class("ow-class");
        assert_eq!(
            tokens(&wrapper_classes(&spec, Some("field-outer"))),
            vec!["ow-class"]
        );

        spec.use_default_class = true;
        assert_eq!(
            tokens(&wrapper_classes(&spec, Some("field-outer"))),
            vec!["ow-class", "field-outer"]
        );
        assert_eq!(tokens(&wrapper_classes(&spec, None)), vec!["ow-class"]);
    }
}
