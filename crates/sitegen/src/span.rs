//! Typed inline text spans.

use sitegen_core::Node;

/// The kind of a [`TextSpan`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed fragment of inline text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    /// Text with no markup
    Plain(String),

    /// `**bold**`
    Bold(String),

    /// `_italic_`
    Italic(String),

    /// `` `code` ``
    Code(String),

    /// `[text](url)`
    Link { text: String, url: String },

    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        TextSpan::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            TextSpan::Plain(_) => SpanKind::Plain,
            TextSpan::Bold(_) => SpanKind::Bold,
            TextSpan::Italic(_) => SpanKind::Italic,
            TextSpan::Code(_) => SpanKind::Code,
            TextSpan::Link { .. } => SpanKind::Link,
            TextSpan::Image { .. } => SpanKind::Image,
        }
    }

    /// Visible text (alt text for images)
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(text)
            | TextSpan::Bold(text)
            | TextSpan::Italic(text)
            | TextSpan::Code(text)
            | TextSpan::Link { text, .. } => text,
            TextSpan::Image { alt, .. } => alt,
        }
    }

    /// URL of a link or image
    pub fn target(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Convert to the leaf node that renders this span
    pub fn into_node(self) -> Node {
        match self {
            TextSpan::Plain(text) => Node::text(text),
            TextSpan::Bold(text) => Node::leaf("b", text),
            TextSpan::Italic(text) => Node::leaf("i", text),
            TextSpan::Code(text) => Node::leaf("code", text),
            TextSpan::Link { text, url } => Node::leaf("a", text).with_attr("href", url),
            TextSpan::Image { alt, url } => Node::leaf("img", "")
                .with_attr("src", url)
                .with_attr("alt", alt),
        }
    }
}
