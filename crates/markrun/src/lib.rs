//! # markrun
//!
//! Compile markdown document trees into styled text runs.
//!
//! The compiler walks a [`Node`] tree bottom-up and produces a
//! [`RunSequence`]: flat text with attributes per run, ready to hand to a
//! rich-text view. Presentation is delegated to two collaborators:
//!
//! - a [`Styler`], called once per visited node with the runs of that node,
//! - a [`PrefixBuilder`], asked for a prefix generator every time a list is
//!   entered.
//!
//! Paragraph breaks are encoded as `U+2029` and line breaks as `U+2028`, so
//! the output stays a single string even for multi-block documents.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use markrun::{Compiler, Node, PlainStyler, StaticPrefixBuilder, PARAGRAPH_SEPARATOR};
//!
//! let doc = Node::document(vec![
//!     Node::heading(1, vec![Node::text("Hello")]),
//!     Node::paragraph(vec![Node::text("World")]),
//! ]);
//!
//! let prefixes = StaticPrefixBuilder::new();
//! let compiler = Compiler::new(&PlainStyler, &prefixes);
//! let runs = compiler.visit(&doc);
//! assert_eq!(runs.text(), format!("Hello{}World", PARAGRAPH_SEPARATOR));
//! ```
//!
//! ## Example (markdown string)
//!
//! ```rust
//! use markrun::{attr, AttrValue, Compiler, StaticPrefixBuilder, StyleRules};
//!
//! let rules = StyleRules::new();
//! let prefixes = StaticPrefixBuilder::new();
//! let compiler = Compiler::new(&rules, &prefixes);
//! let runs = compiler.compile_markdown("Some **bold** text");
//!
//! let bold = runs.iter().find(|run| run.text == "bold").unwrap();
//! assert_eq!(bold.attributes.get(attr::FONT_WEIGHT), Some(&AttrValue::Int(700)));
//! ```

mod compiler;
mod lists;
#[cfg(feature = "markdown")]
pub mod markdown;
mod prefix;
mod rules;
mod styler;
mod utilities;

pub use compiler::Compiler;
pub use lists::{ListScope, ListStack};
#[cfg(feature = "markdown")]
pub use markdown::parse_markdown;
pub use prefix::{PrefixBuilder, Prefixes, StaticPrefixBuilder};
pub use rules::{attr, default_rules, ApplyFn, Filter, StyleRule, StyleRules};
pub use styler::{PlainStyler, StyleKind, StyleTarget, Styler};
pub use utilities::*;

pub use markrun_core::{
    AttrValue, Attributes, Error, ListInfo, ListType, Node, NodeKind, OptionFlag, Options, Result,
    Run, RunSequence, Segment, DEFAULT_BULLET, LINE_SEPARATOR, PARAGRAPH_SEPARATOR,
    PREFIX_SEPARATOR, ZERO_WIDTH_SPACE,
};
