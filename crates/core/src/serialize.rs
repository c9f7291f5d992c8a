//! HTML and JSX serializers for the markup tree.

use crate::markup::{AttrValue, Attribute, Element, Node};
use serde::{Deserialize, Serialize};

/// Elements that never have a closing tag in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Output syntax for [`serialize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupFormat {
    /// HTML text.
    #[default]
    Html,
    /// JSX source, as a component body would be written.
    Jsx,
}

/// Serializes a node in the requested format.
pub fn serialize(node: &Node, format: MarkupFormat) -> String {
    match format {
        MarkupFormat::Html => to_html(node),
        MarkupFormat::Jsx => to_jsx(node),
    }
}

/// Converts a Rust string to a JavaScript string literal.
///
/// # Examples
///
/// ```
/// use uswds_core::serialize::js_string_literal;
///
/// assert_eq!(js_string_literal("hello"), "\"hello\"");
/// assert_eq!(js_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

// ============================================================================
// HTML
// ============================================================================

/// Serializes a node as HTML.
///
/// # Examples
///
/// ```
/// use uswds_core::{Element, Node, to_html};
///
/// let node: Node = Element::new("p").attr("class", "x").child(Node::text("a < b")).into();
/// assert_eq!(to_html(&node), r#"<p class="x">a &lt; b</p>"#);
/// ```
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_html(node, &mut out);
    out
}

fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text { value } => out.push_str(&html_escape::encode_text(value)),
        Node::Fragment { children } => {
            for child in children {
                write_html(child, out);
            }
        }
        Node::Element(element) => write_html_element(element, out),
    }
}

fn write_html_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for attribute in &element.attributes {
        out.push(' ');
        out.push_str(&attribute.name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(
            &attribute.value.as_markup_str(),
        ));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        write_html(child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

// ============================================================================
// JSX
// ============================================================================

/// Serializes a node as JSX source.
///
/// # Examples
///
/// ```
/// use uswds_core::{Element, Node, to_jsx};
///
/// let node: Node = Element::new("button").bool_attr("aria-expanded", true).into();
/// assert_eq!(to_jsx(&node), "<button aria-expanded={true}></button>");
/// ```
pub fn to_jsx(node: &Node) -> String {
    let mut out = String::new();
    write_jsx(node, &mut out);
    out
}

fn write_jsx(node: &Node, out: &mut String) {
    match node {
        Node::Text { value } => push_jsx_text(value, out),
        Node::Fragment { children } => {
            out.push_str("<>");
            for child in children {
                write_jsx(child, out);
            }
            out.push_str("</>");
        }
        Node::Element(element) => write_jsx_element(element, out),
    }
}

fn write_jsx_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for attribute in &element.attributes {
        out.push(' ');
        push_jsx_attribute(attribute, out);
    }

    if element.children.is_empty() && VOID_ELEMENTS.contains(&element.tag.as_str()) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_jsx(child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn push_jsx_attribute(attribute: &Attribute, out: &mut String) {
    out.push_str(&attribute.name);
    match &attribute.value {
        AttrValue::Bool(value) => {
            out.push_str(if *value { "={true}" } else { "={false}" });
        }
        // JSX string attributes have no escape syntax for quotes and decode
        // entities, so anything unusual goes through an expression.
        AttrValue::Text(value) if is_plain_jsx_attr(value) => {
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        AttrValue::Text(value) => {
            out.push_str("={");
            out.push_str(&js_string_literal(value));
            out.push('}');
        }
    }
}

fn is_plain_jsx_attr(value: &str) -> bool {
    !value
        .chars()
        .any(|c| matches!(c, '"' | '&' | '{' | '}' | '\\') || c.is_control())
}

/// Escapes JSX text children: HTML entities plus braces.
///
/// JSX collapses whitespace around line breaks in text children, so text
/// containing one is written as a string expression instead.
fn push_jsx_text(value: &str, out: &mut String) {
    if value.contains(['\n', '\r']) {
        out.push('{');
        out.push_str(&js_string_literal(value));
        out.push('}');
        return;
    }
    for c in html_escape::encode_text(value).chars() {
        match c {
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
}
