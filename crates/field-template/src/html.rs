/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! HTML serialization of render trees.
//!
//! Tagless nodes emit their children in sequence. On elements the `class`
//! attribute comes first, then the remaining attributes in order. Text
//! leaves and attribute values are escaped; content leaves are emitted
//! verbatim since they already hold markup.

use field_template_types::{Child, RenderNode};
use std::io::Write;

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Serialize a render tree to an HTML string.
pub fn to_html(node: &RenderNode) -> String {
    let mut out = String::new();
    push_node(&mut out, node);
    out
}

/// Serialize a render tree to a writer.
pub fn write_html<W: Write>(node: &RenderNode, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(to_html(node).as_bytes())
}

fn push_node(out: &mut String, node: &RenderNode) {
    let Some(tag) = &node.tag else {
        push_children(out, node);
        return;
    };

    out.push('<');
    out.push_str(tag);
    if !node.classes.is_empty() {
        push_attr(out, "class", &node.classes.to_class_attr());
    }
    for (name, value) in &node.attributes {
        push_attr(out, name, value);
    }
    out.push('>');
    push_children(out, node);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_children(out: &mut String, node: &RenderNode) {
    for child in &node.children {
        match child {
            Child::Node(inner) => push_node(out, inner),
            Child::Text(text) => out.push_str(&escape_html(text)),
            Child::Content(content) => out.push_str(content),
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(&escape_html(name));
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}
