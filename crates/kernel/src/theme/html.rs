//! Inline renderer converting render elements to escaped HTML.

use std::fmt::Write;

use gantry_sdk::render::RenderElement;

/// Tags that take no closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Escape text for use in HTML content and attribute values.
pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render an element tree to HTML. All values and attributes are escaped;
/// views cannot emit raw markup.
pub fn render_element(element: &RenderElement) -> String {
    let mut children_html = String::new();
    for child in element.sorted_children() {
        children_html.push_str(&render_element(child));
    }

    match element.element_type.as_str() {
        "markup" => render_markup(element, &children_html),
        // Unknown types render as containers so a sloppy view degrades
        // to visible content instead of disappearing.
        _ => render_container(element, &children_html),
    }
}

fn render_container(element: &RenderElement, children: &str) -> String {
    format!(
        "<div class=\"container{}\"{}>{}</div>",
        class_suffix(element),
        attrs_string(element),
        children
    )
}

fn render_markup(element: &RenderElement, children: &str) -> String {
    let tag = element.tag.as_deref().unwrap_or("span");
    let value = element.value.as_deref().map(html_escape).unwrap_or_default();

    if VOID_ELEMENTS.contains(&tag) {
        return format!("<{}{}{} />", tag, class_attr(element), attrs_string(element));
    }

    format!(
        "<{}{}{}>{}{}</{}>",
        tag,
        class_attr(element),
        attrs_string(element),
        value,
        children,
        tag
    )
}

/// Extra classes appended to a fixed base class: ` a b` or empty.
fn class_suffix(element: &RenderElement) -> String {
    if element.classes.is_empty() {
        String::new()
    } else {
        format!(" {}", html_escape(&element.classes.join(" ")))
    }
}

/// A standalone class attribute: ` class="a b"` or empty.
fn class_attr(element: &RenderElement) -> String {
    if element.classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", html_escape(&element.classes.join(" ")))
    }
}

fn attrs_string(element: &RenderElement) -> String {
    let mut out = String::new();
    for (key, value) in &element.attributes {
        let _ = write!(out, " {}=\"{}\"", key, html_escape(value));
    }
    out
}
