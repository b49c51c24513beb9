//! Styling policy interface.
//!
//! The compiler calls [`Styler::style`] once per visited node, after the
//! node's runs are assembled. Stylers communicate only by mutating the runs.

use markrun_core::RunSequence;

/// What is being styled, with the node's kind-specific metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget<'a> {
    Document,
    BlockQuote { nest_depth: usize },
    List { nest_depth: usize },
    /// The prefix run of a list item, styled on its own before insertion
    ListItemPrefix,
    /// `prefix_len` is the prefix length in Unicode scalar values (`char`s),
    /// without the separator. Hosts measuring in UTF-16 units must convert.
    Item { prefix_len: usize },
    CodeBlock { fence_info: Option<&'a str> },
    HtmlBlock,
    CustomBlock,
    Paragraph,
    Heading { level: u8 },
    ThematicBreak,
    Text,
    SoftBreak,
    LineBreak,
    Code,
    HtmlInline,
    CustomInline,
    Emphasis,
    Strong,
    Link { title: Option<&'a str>, url: &'a str },
    Image { title: Option<&'a str>, url: &'a str },
}

/// Data-free tag of a [`StyleTarget`], used for rule filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Document,
    BlockQuote,
    List,
    ListItemPrefix,
    Item,
    CodeBlock,
    HtmlBlock,
    CustomBlock,
    Paragraph,
    Heading,
    ThematicBreak,
    Text,
    SoftBreak,
    LineBreak,
    Code,
    HtmlInline,
    CustomInline,
    Emphasis,
    Strong,
    Link,
    Image,
}

impl StyleTarget<'_> {
    pub fn kind(&self) -> StyleKind {
        match self {
            StyleTarget::Document => StyleKind::Document,
            StyleTarget::BlockQuote { .. } => StyleKind::BlockQuote,
            StyleTarget::List { .. } => StyleKind::List,
            StyleTarget::ListItemPrefix => StyleKind::ListItemPrefix,
            StyleTarget::Item { .. } => StyleKind::Item,
            StyleTarget::CodeBlock { .. } => StyleKind::CodeBlock,
            StyleTarget::HtmlBlock => StyleKind::HtmlBlock,
            StyleTarget::CustomBlock => StyleKind::CustomBlock,
            StyleTarget::Paragraph => StyleKind::Paragraph,
            StyleTarget::Heading { .. } => StyleKind::Heading,
            StyleTarget::ThematicBreak => StyleKind::ThematicBreak,
            StyleTarget::Text => StyleKind::Text,
            StyleTarget::SoftBreak => StyleKind::SoftBreak,
            StyleTarget::LineBreak => StyleKind::LineBreak,
            StyleTarget::Code => StyleKind::Code,
            StyleTarget::HtmlInline => StyleKind::HtmlInline,
            StyleTarget::CustomInline => StyleKind::CustomInline,
            StyleTarget::Emphasis => StyleKind::Emphasis,
            StyleTarget::Strong => StyleKind::Strong,
            StyleTarget::Link { .. } => StyleKind::Link,
            StyleTarget::Image { .. } => StyleKind::Image,
        }
    }
}

/// A styling policy
pub trait Styler {
    /// Apply presentation attributes to `runs` in place
    fn style(&self, target: &StyleTarget<'_>, runs: &mut RunSequence);
}

impl<F> Styler for F
where
    F: Fn(&StyleTarget<'_>, &mut RunSequence),
{
    fn style(&self, target: &StyleTarget<'_>, runs: &mut RunSequence) {
        self(target, runs)
    }
}

/// A styler that leaves runs untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn style(&self, _target: &StyleTarget<'_>, _runs: &mut RunSequence) {}
}
