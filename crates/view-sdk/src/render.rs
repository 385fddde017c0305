//! Render element builder API.
//!
//! Views return structured render trees (never raw HTML). The kernel's theme
//! escapes and converts these to markup, so a misbehaving view cannot inject
//! script into the page frame.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in the render tree.
///
/// `element_type` is either `"container"` (groups children) or `"markup"`
/// (a single HTML tag with an optional text value). Children render in
/// weight order; equal weights keep insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderElement {
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub weight: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderElement>,
}

fn is_zero(weight: &i32) -> bool {
    *weight == 0
}

impl RenderElement {
    /// Append a child element.
    pub fn push_child(&mut self, element: RenderElement) {
        self.children.push(element);
    }

    /// Children sorted by weight, insertion order preserved within a weight.
    pub fn sorted_children(&self) -> Vec<&RenderElement> {
        let mut children: Vec<&RenderElement> = self.children.iter().collect();
        children.sort_by_key(|c| c.weight);
        children
    }
}

/// Builder for constructing render elements.
pub struct ElementBuilder {
    element: RenderElement,
}

impl ElementBuilder {
    fn new(element_type: &str) -> Self {
        Self {
            element: RenderElement {
                element_type: element_type.into(),
                tag: None,
                value: None,
                weight: 0,
                classes: Vec::new(),
                attributes: BTreeMap::new(),
                children: Vec::new(),
            },
        }
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.element.weight = weight;
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.element.classes.push(class.into());
        self
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.element.attributes.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, element: RenderElement) -> Self {
        self.element.children.push(element);
        self
    }

    pub fn build(self) -> RenderElement {
        self.element
    }
}

/// Create a container element (groups children).
pub fn container() -> ElementBuilder {
    ElementBuilder::new("container")
}

/// Create a markup element with an HTML tag and text value.
pub fn markup(tag: &str, value: &str) -> ElementBuilder {
    let mut builder = ElementBuilder::new("markup");
    builder.element.tag = Some(tag.into());
    builder.element.value = Some(value.into());
    builder
}

/// Create an empty markup element (tag only, e.g. `hr`).
pub fn tag(tag: &str) -> ElementBuilder {
    let mut builder = ElementBuilder::new("markup");
    builder.element.tag = Some(tag.into());
    builder
}

/// Create a link element.
pub fn link(href: &str, text: &str) -> ElementBuilder {
    let mut builder = ElementBuilder::new("markup");
    builder.element.tag = Some("a".into());
    builder.element.value = Some(text.into());
    builder
        .element
        .attributes
        .insert("href".into(), href.into());
    builder
}
