//! HTML node tree.
//!
//! A rendered document is a tree of [`Node`]s: tagged or untagged text leaves
//! hanging off element parents. Every parent owns its children outright, so a
//! tree is built bottom-up, serialized once with [`Node::to_html`] and dropped.

use std::fmt;

use indexmap::IndexMap;

use crate::NodeError;

/// Attributes of an element, in insertion order.
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML tree.
///
/// Built only through [`Node::text`], [`Node::leaf`] and [`Node::parent`], so
/// every parent carries a non-empty tag that can enclose children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    /// Text, optionally wrapped in a single element with no children
    Leaf { tag: Option<String>, value: String },

    /// Element with an ordered list of owned children
    Parent { tag: String, children: Vec<Node> },
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: Attributes::new(),
        }
    }

    /// Create an untagged leaf that renders as its bare value
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Leaf {
            tag: None,
            value: value.into(),
        })
    }

    /// Create a leaf wrapped in `tag`
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(NodeKind::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
        })
    }

    /// Create a parent element.
    ///
    /// The tag must be non-empty and must not be a self-closing tag.
    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Result<Self, NodeError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(NodeError::MissingTag);
        }
        if is_self_closing(&tag) {
            return Err(NodeError::SelfClosingParent(tag));
        }
        Ok(Self::new(NodeKind::Parent { tag, children }))
    }

    /// Set an attribute, replacing any previous value under the same name.
    ///
    /// A replaced attribute keeps its original position.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { tag, .. } => tag.as_deref(),
            NodeKind::Parent { tag, .. } => Some(tag),
        }
    }

    /// Get the value of a leaf node
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { value, .. } => Some(value),
            NodeKind::Parent { .. } => None,
        }
    }

    /// Get the child nodes (always empty for leaves)
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Leaf { .. } => &[],
            NodeKind::Parent { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match &self.kind {
            NodeKind::Leaf { value, .. } => value.clone(),
            NodeKind::Parent { children, .. } => children.iter().map(Node::text_content).collect(),
        }
    }

    /// Serialize this node and its descendants to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Leaf { tag: None, value } => out.push_str(value),
            NodeKind::Leaf {
                tag: Some(tag),
                value,
            } => {
                if is_self_closing(tag) {
                    out.push('<');
                    out.push_str(tag);
                    push_attributes(&self.attributes, out);
                    out.push_str(" />");
                    return;
                }
                open_tag(tag, &self.attributes, out);
                out.push_str(value);
                close_tag(tag, out);
            }
            NodeKind::Parent { tag, children } => {
                open_tag(tag, &self.attributes, out);
                for child in children {
                    child.write_html(out);
                }
                close_tag(tag, out);
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Tags written as `<tag ... />` with no content or closing tag
const SELF_CLOSING: &[&str] = &["img"];

fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING.contains(&tag)
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Write ` name="value"` for each attribute. Values are not escaped.
fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
