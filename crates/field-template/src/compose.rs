/*
 * compose.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Wrapper composition.
//!
//! The final tree nests up to three wrapper elements around the label and
//! content, always in the same order:
//!
//! ```text
//! outer > field-items > field-item > [label, content]
//! ```
//!
//! Disabled slots contribute nothing; the remaining wrappers keep their
//! relative order.

use crate::classes::wrapper_classes;
use crate::settings::ResolvedFieldSettings;
use field_template_types::{Attributes, Child, RenderNode, WrapperSlot, WrapperSpec, empty_attributes};
use indexmap::IndexMap;

/// Collaborator-supplied defaults per wrapper slot.
///
/// A slot's default class is added when its wrapper sets `use_default_class`;
/// its default attributes when it sets `use_default_attributes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotDefaults {
    classes: IndexMap<WrapperSlot, String>,
    attributes: IndexMap<WrapperSlot, Attributes>,
}

impl SlotDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, slot: WrapperSlot, class: impl Into<String>) -> Self {
        self.classes.insert(slot, class.into());
        self
    }

    pub fn with_attributes(mut self, slot: WrapperSlot, attributes: Attributes) -> Self {
        self.attributes.insert(slot, attributes);
        self
    }

    pub fn with_attribute(
        mut self,
        slot: WrapperSlot,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes
            .entry(slot)
            .or_insert_with(empty_attributes)
            .insert(name.into(), value.into());
        self
    }

    pub fn default_class(&self, slot: WrapperSlot) -> Option<&str> {
        self.classes.get(&slot).map(String::as_str)
    }

    pub fn default_attributes(&self, slot: WrapperSlot) -> Option<&Attributes> {
        self.attributes.get(&slot)
    }
}

/// Combine explicit and default attributes.
///
/// Explicit entries come first in their own order, then defaults whose name
/// the explicit set does not mention. An explicit empty value removes the
/// attribute, default included. Empty values are never emitted.
pub fn merge_attributes(explicit: &Attributes, defaults: Option<&Attributes>) -> Attributes {
    let mut merged = empty_attributes();
    for (name, value) in explicit {
        if !value.is_empty() {
            merged.insert(name.clone(), value.clone());
        }
    }
    if let Some(defaults) = defaults {
        for (name, value) in defaults {
            if !value.is_empty() && !explicit.contains_key(name) {
                merged.insert(name.clone(), value.clone());
            }
        }
    }
    merged
}

/// The element for one enabled wrapper slot.
pub fn wrapper_node(
    slot: WrapperSlot,
    spec: &WrapperSpec,
    defaults: &SlotDefaults,
    children: Vec<Child>,
) -> RenderNode {
    let default_attributes = if spec.use_default_attributes {
        defaults.default_attributes(slot)
    } else {
        None
    };
    RenderNode::element(spec.tag.clone())
        .with_classes(wrapper_classes(spec, defaults.default_class(slot)))
        .with_attributes(merge_attributes(&spec.attributes, default_attributes))
        .with_children(children)
}

/// Assemble the field's tree from its label, content and wrappers.
///
/// With no enabled slot the root is a fragment holding the label (if any)
/// followed by the content.
pub fn compose(
    settings: &ResolvedFieldSettings<'_>,
    label: Option<RenderNode>,
    content: Child,
    defaults: &SlotDefaults,
) -> RenderNode {
    let mut children: Vec<Child> = label.map(Child::Node).into_iter().collect();
    children.push(content);

    let mut wrapped: Option<RenderNode> = None;
    for slot in WrapperSlot::INNER_TO_OUTER {
        let spec = settings.wrapper(slot);
        if !spec.enabled {
            continue;
        }
        let inner = match wrapped.take() {
            Some(node) => vec![Child::Node(node)],
            None => std::mem::take(&mut children),
        };
        wrapped = Some(wrapper_node(slot, spec, defaults, inner));
    }

    wrapped.unwrap_or_else(|| RenderNode::fragment(children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FieldSettingsResolver, SettingsLayers};
    use field_template_types::FieldKind;
    use pretty_assertions::assert_eq;

    fn plain_settings() -> ResolvedFieldSettings<'static> {
        FieldSettingsResolver::default().resolve(FieldKind::Plain, SettingsLayers::default())
    }

    fn content() -> Child {
        Child::Content("Hello".to_string())
    }

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        let mut attributes = empty_attributes();
        for (name, value) in pairs {
            attributes.insert(name.to_string(), value.to_string());
        }
        attributes
    }

    #[test]
    fn test_no_wrappers_gives_fragment() {
        let root = compose(&plain_settings(), None, content(), &SlotDefaults::new());
        assert!(root.is_fragment());
        assert_eq!(root.children, vec![content()]);
    }

    #[test]
    fn test_label_precedes_content() {
        let label = RenderNode::element("div").with_children(vec![Child::Text("Body".into())]);
        let root = compose(
            &plain_settings(),
            Some(label.clone()),
            content(),
            &SlotDefaults::new(),
        );
        assert_eq!(root.children, vec![Child::Node(label), content()]);
    }

    #[test]
    fn test_all_slots_nest_outer_to_inner() {
        let mut settings = plain_settings();
        settings.outer = WrapperSpec::enabled("section");
        settings.field_items = WrapperSpec::enabled("ul");
        settings.field_item = WrapperSpec::enabled("li");

        let root = compose(&settings, None, content(), &SlotDefaults::new());
        let tags: Vec<_> = root
            .content_ancestors()
            .iter()
            .map(|node| node.tag.clone().unwrap_or_default())
            .collect();
        assert_eq!(tags, vec!["section", "ul", "li"]);
    }

    #[test]
    fn test_label_lives_in_innermost_wrapper() {
        let mut settings = plain_settings();
        settings.outer = WrapperSpec::enabled("div");
        settings.field_item = WrapperSpec::enabled("span");
        let label = RenderNode::element("div");

        let root = compose(&settings, Some(label.clone()), content(), &SlotDefaults::new());
        let Child::Node(item) = &root.children[0] else {
            panic!("expected field item wrapper");
        };
        assert_eq!(item.tag.as_deref(), Some("span"));
        assert_eq!(item.children, vec![Child::Node(label), content()]);
    }

    #[test]
    fn test_default_class_and_attributes() {
        let mut settings = plain_settings();
        settings.outer = WrapperSpec::enabled("div").with_class("ow-class");
        settings.outer.use_default_class = true;
        settings.outer.use_default_attributes = true;
        let defaults = SlotDefaults::new()
            .with_class(WrapperSlot::Outer, "field-outer")
            .with_attribute(WrapperSlot::Outer, "role", "group");

        let root = compose(&settings, None, content(), &defaults);
        assert_eq!(root.classes.to_class_attr(), "ow-class field-outer");
        assert_eq!(root.attributes, attrs(&[("role", "group")]));
    }

    #[test]
    fn test_defaults_ignored_without_flags() {
        let mut settings = plain_settings();
        settings.outer = WrapperSpec::enabled("div");
        let defaults = SlotDefaults::new()
            .with_class(WrapperSlot::Outer, "field-outer")
            .with_attribute(WrapperSlot::Outer, "role", "group");

        let root = compose(&settings, None, content(), &defaults);
        assert!(root.classes.is_empty());
        assert!(root.attributes.is_empty());
    }

    #[test]
    fn test_merge_attributes_explicit_wins() {
        let merged = merge_attributes(
            &attrs(&[("name", "ow-att"), ("role", "main")]),
            Some(&attrs(&[("role", "group"), ("lang", "en")])),
        );
        assert_eq!(
            merged,
            attrs(&[("name", "ow-att"), ("role", "main"), ("lang", "en")])
        );
    }

    #[test]
    fn test_merge_attributes_empty_removes_default() {
        let merged = merge_attributes(
            &attrs(&[("name", ""), ("id", "x")]),
            Some(&attrs(&[("name", "default"), ("title", "")])),
        );
        assert_eq!(merged, attrs(&[("id", "x")]));
    }
}
