//! Compiler - walks a document tree and assembles styled runs.

use markrun_core::{
    Node, NodeKind, Options, RunSequence, Segment, LINE_SEPARATOR, PARAGRAPH_SEPARATOR,
    ZERO_WIDTH_SPACE,
};

use crate::lists::ListStack;
use crate::prefix::PrefixBuilder;
use crate::styler::{StyleTarget, Styler};
use crate::utilities::{prefix_text, replace_newlines_with_line_separators};

/// Compiles document trees into run sequences
///
/// The compiler only borrows its collaborators. Every call to [`visit`] or
/// [`segment`] owns a fresh list stack, so calls are independent.
///
/// [`visit`]: Compiler::visit
/// [`segment`]: Compiler::segment
pub struct Compiler<'a, S: ?Sized, P: ?Sized> {
    styler: &'a S,
    prefixes: &'a P,
    options: Options,
}

impl<'a, S, P> Compiler<'a, S, P>
where
    S: Styler + ?Sized,
    P: PrefixBuilder + ?Sized,
{
    /// Create a compiler with default options
    pub fn new(styler: &'a S, prefixes: &'a P) -> Self {
        Self::with_options(styler, prefixes, Options::default())
    }

    /// Create a compiler with custom options
    pub fn with_options(styler: &'a S, prefixes: &'a P, options: Options) -> Self {
        Self {
            styler,
            prefixes,
            options,
        }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Compile a tree into one run sequence
    pub fn visit(&self, node: &Node) -> RunSequence {
        let mut lists = ListStack::new();
        self.visit_with(&mut lists, node)
    }

    /// Compile a tree against a caller-owned list stack
    pub fn visit_with(&self, lists: &mut ListStack, node: &Node) -> RunSequence {
        match &node.kind {
            NodeKind::Document => {
                let mut runs = self.join_children(lists, node);
                self.styler.style(&StyleTarget::Document, &mut runs);
                runs
            }
            NodeKind::BlockQuote { nest_depth } => self.visit_block(
                lists,
                node,
                StyleTarget::BlockQuote {
                    nest_depth: *nest_depth,
                },
            ),
            NodeKind::List(info) => {
                let mut scope = lists.enter(self.prefixes, info);
                let mut runs = self.join_children(&mut scope, node);
                drop(scope);

                self.separate(node, &mut runs);
                self.styler.style(
                    &StyleTarget::List {
                        nest_depth: info.nest_depth,
                    },
                    &mut runs,
                );
                runs
            }
            NodeKind::Item => self.visit_item(lists, node),
            NodeKind::CodeBlock { literal, fence_info } => {
                let Some(literal) = literal else {
                    return RunSequence::new();
                };
                let mut runs = RunSequence::from_text(literal);
                self.styler.style(
                    &StyleTarget::CodeBlock {
                        fence_info: fence_info.as_deref(),
                    },
                    &mut runs,
                );
                runs
            }
            NodeKind::HtmlBlock { literal } => {
                let Some(literal) = literal else {
                    return RunSequence::new();
                };
                let text = replace_newlines_with_line_separators(literal);
                let mut runs = RunSequence::from_text(&text);
                self.separate(node, &mut runs);
                self.styler.style(&StyleTarget::HtmlBlock, &mut runs);
                runs
            }
            NodeKind::CustomBlock { literal } => {
                self.visit_literal(literal.as_deref(), StyleTarget::CustomBlock)
            }
            NodeKind::Paragraph => self.visit_block(lists, node, StyleTarget::Paragraph),
            NodeKind::Heading { level } => {
                self.visit_block(lists, node, StyleTarget::Heading { level: *level })
            }
            NodeKind::ThematicBreak => {
                let text = format!("{}{}", ZERO_WIDTH_SPACE, LINE_SEPARATOR);
                let mut runs = RunSequence::from_text(&text);
                self.styler.style(&StyleTarget::ThematicBreak, &mut runs);
                runs
            }
            NodeKind::Text { literal } => self.visit_literal(literal.as_deref(), StyleTarget::Text),
            NodeKind::SoftBreak => {
                let text = if self.options.hard_breaks {
                    LINE_SEPARATOR
                } else {
                    " "
                };
                let mut runs = RunSequence::from_text(text);
                self.styler.style(&StyleTarget::SoftBreak, &mut runs);
                runs
            }
            NodeKind::LineBreak => {
                let mut runs = RunSequence::from_text(LINE_SEPARATOR);
                self.styler.style(&StyleTarget::LineBreak, &mut runs);
                runs
            }
            NodeKind::Code { literal } => self.visit_literal(literal.as_deref(), StyleTarget::Code),
            NodeKind::HtmlInline { literal } => {
                self.visit_literal(literal.as_deref(), StyleTarget::HtmlInline)
            }
            NodeKind::CustomInline { literal } => {
                self.visit_literal(literal.as_deref(), StyleTarget::CustomInline)
            }
            NodeKind::Emphasis => self.visit_inline(lists, node, StyleTarget::Emphasis),
            NodeKind::Strong => self.visit_inline(lists, node, StyleTarget::Strong),
            NodeKind::Link { url, title } => self.visit_inline(
                lists,
                node,
                StyleTarget::Link {
                    title: title.as_deref(),
                    url,
                },
            ),
            NodeKind::Image { url, title } => self.visit_inline(
                lists,
                node,
                StyleTarget::Image {
                    title: title.as_deref(),
                    url,
                },
            ),
            NodeKind::Unknown { name } => {
                log::debug!("skipping unknown node kind `{}`", name);
                RunSequence::new()
            }
        }
    }

    /// Split a document into prose segments and code block segments
    ///
    /// Only direct children of `document` are considered; code blocks nested
    /// deeper stay inside their prose segment.
    pub fn segment(&self, document: &Node) -> Vec<Segment> {
        let mut lists = ListStack::new();
        let mut segments = Vec::new();
        let mut prose = RunSequence::new();

        for child in &document.children {
            if child.is_code_block() {
                flush_prose(&mut prose, &mut segments);
                let content = self.visit_with(&mut lists, child);
                let language = child.fence_info().map(str::to_string);
                log::trace!("code segment, language {:?}", language);
                segments.push(Segment::code(content, language));
            } else {
                prose.append(self.visit_with(&mut lists, child));
            }
        }
        flush_prose(&mut prose, &mut segments);

        segments
    }

    /// Parse markdown text and compile it into one run sequence
    #[cfg(feature = "markdown")]
    pub fn compile_markdown(&self, markdown: &str) -> RunSequence {
        self.visit(&crate::markdown::parse_markdown(markdown))
    }

    /// Parse markdown text and split it into segments
    #[cfg(feature = "markdown")]
    pub fn segment_markdown(&self, markdown: &str) -> Vec<Segment> {
        self.segment(&crate::markdown::parse_markdown(markdown))
    }

    /// Visit all children in order and concatenate their runs
    fn join_children(&self, lists: &mut ListStack, node: &Node) -> RunSequence {
        let mut runs = RunSequence::new();
        for child in &node.children {
            runs.append(self.visit_with(lists, child));
        }
        runs
    }

    /// Append a paragraph separator if the node has a successor
    fn separate(&self, node: &Node, runs: &mut RunSequence) {
        if node.has_successor {
            runs.push_str(PARAGRAPH_SEPARATOR);
        }
    }

    fn visit_block(
        &self,
        lists: &mut ListStack,
        node: &Node,
        target: StyleTarget<'_>,
    ) -> RunSequence {
        let mut runs = self.join_children(lists, node);
        self.separate(node, &mut runs);
        self.styler.style(&target, &mut runs);
        runs
    }

    fn visit_inline(
        &self,
        lists: &mut ListStack,
        node: &Node,
        target: StyleTarget<'_>,
    ) -> RunSequence {
        let mut runs = self.join_children(lists, node);
        self.styler.style(&target, &mut runs);
        runs
    }

    fn visit_literal(&self, literal: Option<&str>, target: StyleTarget<'_>) -> RunSequence {
        let Some(literal) = literal else {
            return RunSequence::new();
        };
        let mut runs = RunSequence::from_text(literal);
        self.styler.style(&target, &mut runs);
        runs
    }

    fn visit_item(&self, lists: &mut ListStack, node: &Node) -> RunSequence {
        let mut runs = self.join_children(lists, node);

        let prefix = lists.next_prefix().unwrap_or_else(|| {
            log::debug!(
                "no list prefix available, using fallback bullet {:?}",
                self.options.fallback_bullet
            );
            self.options.fallback_bullet.clone()
        });
        let mut prefix_runs = RunSequence::from_text(&prefix_text(&prefix));
        self.styler.style(&StyleTarget::ListItemPrefix, &mut prefix_runs);
        runs.insert(0, prefix_runs);

        self.separate(node, &mut runs);
        self.styler.style(
            &StyleTarget::Item {
                prefix_len: prefix.chars().count(),
            },
            &mut runs,
        );
        runs
    }
}

/// Move accumulated prose into a segment unless it is empty
fn flush_prose(prose: &mut RunSequence, segments: &mut Vec<Segment>) {
    if prose.is_empty() {
        return;
    }
    let content = std::mem::take(prose);
    log::trace!("prose segment with {} runs", content.len());
    segments.push(Segment::prose(content));
}
