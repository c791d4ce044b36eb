/*
 * label.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Label formatting.

use field_template_types::{Child, ClassList, LabelFormat, RenderNode};

pub const LABEL_TAG: &str = "div";
pub const LABEL_SEPARATOR: char = ':';

/// Presentation options for label nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOptions {
    /// Prefix for the position classes, e.g. `field-` gives `field-label-above`.
    pub class_prefix: String,
}

impl LabelOptions {
    pub fn with_class_prefix(prefix: impl Into<String>) -> Self {
        LabelOptions {
            class_prefix: prefix.into(),
        }
    }

    /// The position class for a visible label format.
    pub fn class_for(&self, format: LabelFormat) -> Option<String> {
        let position = match format {
            LabelFormat::Hidden => return None,
            LabelFormat::Above => "label-above",
            LabelFormat::Inline => "label-inline",
        };
        Some(format!("{}{position}", self.class_prefix))
    }
}

/// The text a label shows, or `None` when the label is hidden.
///
/// Custom text wins when non-empty; otherwise the field's default name is
/// used. Inline labels get exactly one trailing separator when requested,
/// even if the text already ends with one. Labels above the content never
/// get a separator.
pub fn label_text(
    format: LabelFormat,
    custom_text: &str,
    default_name: &str,
    append_separator: bool,
) -> Option<String> {
    if format == LabelFormat::Hidden {
        return None;
    }
    let mut text = if custom_text.is_empty() {
        default_name.to_string()
    } else {
        custom_text.to_string()
    };
    if append_separator && format == LabelFormat::Inline {
        text.push(LABEL_SEPARATOR);
    }
    Some(text)
}

/// Produce the label node for a field with default options.
pub fn format_label(
    format: LabelFormat,
    custom_text: &str,
    default_name: &str,
    append_separator: bool,
) -> Option<RenderNode> {
    format_label_with(
        &LabelOptions::default(),
        format,
        custom_text,
        default_name,
        append_separator,
    )
}

/// Produce the label node for a field.
///
/// Hidden labels produce nothing. Visible labels are a `div` with one
/// position class and a single text child.
pub fn format_label_with(
    options: &LabelOptions,
    format: LabelFormat,
    custom_text: &str,
    default_name: &str,
    append_separator: bool,
) -> Option<RenderNode> {
    let text = label_text(format, custom_text, default_name, append_separator)?;
    let mut classes = ClassList::new();
    if let Some(class) = options.class_for(format) {
        classes.push(&class);
    }
    Some(
        RenderNode::element(LABEL_TAG)
            .with_classes(classes)
            .with_children(vec![Child::Text(text)]),
    )
}
