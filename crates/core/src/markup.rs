//! Typed markup tree produced by the component renderers.
//!
//! Components never concatenate strings. They build [`Node`] values and hand
//! them to a serializer (`crate::serialize`), which owns all escaping.

use serde::Serialize;
use std::borrow::Cow;

/// A node in the rendered markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// An element with a tag name, ordered attributes and children.
    Element(Element),
    /// A text node. Escaped on serialization.
    Text {
        /// The unescaped text.
        value: String,
    },
    /// A list of sibling nodes without a wrapping element.
    Fragment {
        /// The sibling nodes, in order.
        children: Vec<Node>,
    },
}

impl Node {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Creates a fragment from sibling nodes.
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment {
            children: children.into_iter().collect(),
        }
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the direct children of an element or fragment.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Fragment { children } => children,
            Node::Text { .. } => &[],
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name, e.g. `div`.
    pub tag: String,
    /// Attributes in emission order.
    pub attributes: Vec<Attribute>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a string attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: AttrValue::Text(value.into()),
        });
        self
    }

    /// Appends a boolean-valued attribute such as `aria-expanded`.
    ///
    /// The value is kept typed so HTML output can print `"true"`/`"false"`
    /// while JSX output prints `{true}`/`{false}`.
    pub fn bool_attr(mut self, name: impl Into<String>, value: bool) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: AttrValue::Bool(value),
        });
        self
    }

    /// Appends one child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several children, preserving order.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Looks up an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Looks up a string attribute value by name.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        match self.get_attr(name) {
            Some(AttrValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Looks up a boolean attribute value by name.
    pub fn attr_bool(&self, name: &str) -> Option<bool> {
        match self.get_attr(name) {
            Some(AttrValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Iterates over the child nodes that are elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// A single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    pub value: AttrValue,
}

/// Attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Plain string value.
    Text(String),
    /// Boolean value, printed as `true`/`false`.
    Bool(bool),
}

impl AttrValue {
    /// Returns the value as it appears inside a quoted HTML attribute (unescaped).
    pub fn as_markup_str(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Text(value) => Cow::Borrowed(value),
            AttrValue::Bool(true) => Cow::Borrowed("true"),
            AttrValue::Bool(false) => Cow::Borrowed("false"),
        }
    }
}
