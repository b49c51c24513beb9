//! markrun-core - document tree and styled run container
//!
//! This crate provides the data model shared by the `markrun` compiler and
//! its hosts: the input [`Node`] tree, the output [`RunSequence`] and
//! [`Segment`] types, and the compile [`Options`].
//!
//! # Architecture
//!
//! ```text
//! Markdown parser ──▶ ┌───────────┐     ┌────────────┐
//!                     │ Node tree │ ──▶ │ markrun    │ ──▶ RunSequence / Segments
//! Host tree builder ─▶└───────────┘     └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use markrun_core::{Node, RunSequence, PARAGRAPH_SEPARATOR};
//!
//! let doc = Node::document(vec![
//!     Node::paragraph(vec![Node::text("Hello")]),
//!     Node::paragraph(vec![Node::text("World")]),
//! ]);
//! assert!(doc.children[0].has_successor);
//!
//! let mut runs = RunSequence::from_text("Hello");
//! runs.push_str(PARAGRAPH_SEPARATOR);
//! assert_eq!(runs.to_plain_text(), "Hello\n");
//! ```

mod ast;
mod options;
mod runs;

pub use ast::{ListInfo, ListType, Node, NodeKind};
pub use options::{OptionFlag, Options};
pub use runs::{
    AttrValue, Attributes, Run, RunSequence, Segment, DEFAULT_BULLET, LINE_SEPARATOR,
    PARAGRAPH_SEPARATOR, PREFIX_SEPARATOR, ZERO_WIDTH_SPACE,
};

/// Error type for markrun operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;
