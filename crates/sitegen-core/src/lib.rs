//! sitegen-core - HTML node tree and serialization
//!
//! This crate provides the tree that the Markdown renderer in `sitegen` builds,
//! and the serializer that turns it into an HTML string.
//!
//! # Example
//!
//! ```rust
//! use sitegen_core::Node;
//!
//! let tree = Node::parent(
//!     "p",
//!     vec![
//!         Node::text("Some "),
//!         Node::leaf("b", "bold"),
//!         Node::text(" text."),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(tree.to_html(), "<p>Some <b>bold</b> text.</p>");
//! ```

mod node;

pub use node::{Attributes, Node};

/// Error type for node construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Parent node must have a tag")]
    MissingTag,

    #[error("Self-closing tag <{0}> cannot have children")]
    SelfClosingParent(String),
}
