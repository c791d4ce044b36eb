/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The render tree produced for a field.
//!
//! A `RenderNode` is markup-agnostic: consumers serialize it to HTML, a UI
//! tree or anything else. A node without a tag is a fragment whose children
//! are emitted one after another with no wrapping element.

use crate::attr::{Attributes, ClassList, empty_attributes};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "ClassList::is_empty")]
    pub classes: ClassList,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default)]
    pub children: Vec<Child>,
}

/// A child of a render node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Child {
    Node(RenderNode),
    /// Plain text, escaped by serializers.
    Text(String),
    /// The field's content, inserted verbatim into its slot.
    Content(String),
}

impl RenderNode {
    /// An empty element with the given tag.
    pub fn element(tag: impl Into<String>) -> Self {
        RenderNode {
            tag: Some(tag.into()),
            classes: ClassList::new(),
            attributes: empty_attributes(),
            children: Vec::new(),
        }
    }

    /// A tagless node holding `children`.
    pub fn fragment(children: Vec<Child>) -> Self {
        RenderNode {
            tag: None,
            classes: ClassList::new(),
            attributes: empty_attributes(),
            children,
        }
    }

    pub fn with_classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_children(mut self, children: Vec<Child>) -> Self {
        self.children = children;
        self
    }

    pub fn is_fragment(&self) -> bool {
        self.tag.is_none()
    }

    /// Number of content leaves anywhere below this node.
    pub fn content_leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Child::Node(node) => node.content_leaf_count(),
                Child::Content(_) => 1,
                Child::Text(_) => 0,
            })
            .sum()
    }

    /// The first content leaf in document order.
    pub fn find_content(&self) -> Option<&str> {
        self.children.iter().find_map(|child| match child {
            Child::Node(node) => node.find_content(),
            Child::Content(content) => Some(content.as_str()),
            Child::Text(_) => None,
        })
    }

    /// Elements enclosing the content leaf, outermost first.
    ///
    /// The node itself is included when it has a tag.
    pub fn content_ancestors(&self) -> Vec<&RenderNode> {
        let mut chain = Vec::new();
        self.collect_content_ancestors(&mut chain);
        chain
    }

    fn collect_content_ancestors<'a>(&'a self, chain: &mut Vec<&'a RenderNode>) -> bool {
        if self.tag.is_some() {
            chain.push(self);
        }
        for child in &self.children {
            match child {
                Child::Content(_) => return true,
                Child::Node(node) => {
                    if node.collect_content_ancestors(chain) {
                        return true;
                    }
                }
                Child::Text(_) => {}
            }
        }
        if self.tag.is_some() {
            chain.pop();
        }
        false
    }

    /// Concatenated text of all text leaves below this node.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Child::Node(node) => out.push_str(&node.text()),
                Child::Text(text) => out.push_str(text),
                Child::Content(_) => {}
            }
        }
        out
    }
}
