//! # sitegen
//!
//! Convert a small, fixed dialect of Markdown into an HTML node tree.
//!
//! ## Pipeline
//!
//! ```text
//! Markdown ──segment──▶ blocks ──classify──▶ typed blocks ──render──▶ div root ──to_html──▶ HTML
//!                                                 │
//!                                 inline text ──tokenize──▶ spans ──▶ leaf nodes
//! ```
//!
//! The grammar covers `#` headings, fenced code, `>` quotes, `- ` and `1. `
//! lists and paragraphs, with `**bold**`, `_italic_`, `` `code` ``,
//! `[links](url)` and `![images](url)` inline. Nested emphasis, escapes and
//! raw HTML are not supported.
//!
//! ## Example
//!
//! ```rust
//! use sitegen::render_document;
//!
//! let root = render_document("# Heading\n\nSome **bold** text.").unwrap();
//! assert_eq!(
//!     root.to_html(),
//!     "<div><h1>Heading</h1><p>Some <b>bold</b> text.</p></div>"
//! );
//! ```

pub mod block;
pub mod extract;
mod render;
mod span;
pub mod tokenize;
mod title;

pub use block::{classify, segment, BlockType};
pub use extract::{extract_images, extract_links, InlineMatch};
pub use render::{markdown_to_html, render_block, render_document};
pub use sitegen_core::{Node, NodeError};
pub use span::{SpanKind, TextSpan};
pub use title::extract_title;
pub use tokenize::{tokenize, Delimiter};

/// Error type for sitegen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unterminated inline span: odd number of `{delimiter}` delimiters")]
    MalformedInlineSpan { delimiter: &'static str },

    #[error("No title found: document has no `# ` heading")]
    NoTitleFound,

    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    #[error(transparent)]
    Node(#[from] NodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
