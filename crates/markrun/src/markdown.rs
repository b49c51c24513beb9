//! Markdown parsing support.
//!
//! This module builds the [`Node`] tree consumed by the compiler from
//! CommonMark text, using pulldown-cmark's event stream.

use markrun_core::{ListInfo, Node, NodeKind};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag};

/// Parse markdown text into a document tree.
///
/// Has-successor flags, block quote and list nesting depths, and list
/// tightness are filled in.
///
/// # Example
///
/// ```rust
/// use markrun::{parse_markdown, NodeKind};
///
/// let doc = parse_markdown("# Hello\n\nWorld");
/// assert_eq!(doc.kind, NodeKind::Document);
/// assert_eq!(doc.children.len(), 2);
/// assert!(doc.children[0].has_successor);
/// ```
pub fn parse_markdown(markdown: &str) -> Node {
    let mut builder = TreeBuilder::new();
    for event in Parser::new(markdown) {
        builder.event(event);
    }
    builder.finish()
}

/// Assembles nodes from start/end events
struct TreeBuilder {
    /// Open nodes; the document is always at the bottom
    stack: Vec<Node>,
    quote_depth: usize,
    list_depth: usize,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Node::new(NodeKind::Document)],
            quote_depth: 0,
            list_depth: 0,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push(Node::code(&code)),
            Event::Html(html) => {
                if !self.append_literal(&html) {
                    self.push(html_inline(&html));
                }
            }
            Event::InlineHtml(html) => self.push(html_inline(&html)),
            Event::SoftBreak => self.push(Node::soft_break()),
            Event::HardBreak => self.push(Node::line_break()),
            Event::Rule => self.push(Node::thematic_break()),
            other => log::debug!("ignoring markdown event {:?}", other),
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let kind = match tag {
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::Heading { level, .. } => NodeKind::Heading {
                level: heading_level_to_u8(level),
            },
            Tag::BlockQuote(_) => {
                let nest_depth = self.quote_depth;
                self.quote_depth += 1;
                NodeKind::BlockQuote { nest_depth }
            }
            Tag::CodeBlock(kind) => {
                let fence_info = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let info = info.trim();
                        (!info.is_empty()).then(|| info.to_string())
                    }
                    CodeBlockKind::Indented => None,
                };
                NodeKind::CodeBlock {
                    literal: Some(String::new()),
                    fence_info,
                }
            }
            Tag::HtmlBlock => NodeKind::HtmlBlock {
                literal: Some(String::new()),
            },
            Tag::List(start) => {
                let nest_depth = self.list_depth;
                self.list_depth += 1;
                match start {
                    Some(start) => NodeKind::List(ListInfo::ordered(start, nest_depth)),
                    None => NodeKind::List(ListInfo::bullet(nest_depth)),
                }
            }
            Tag::Item => NodeKind::Item,
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Link {
                dest_url, title, ..
            } => NodeKind::Link {
                url: dest_url.into_string(),
                title: non_empty(&title),
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                url: dest_url.into_string(),
                title: non_empty(&title),
            },
            other => NodeKind::Unknown {
                name: format!("{:?}", other),
            },
        };
        self.stack.push(Node::new(kind));
    }

    fn end(&mut self) {
        // The document itself is never closed by an event.
        if self.stack.len() < 2 {
            return;
        }
        let Some(mut node) = self.stack.pop() else {
            return;
        };

        match node.kind {
            NodeKind::BlockQuote { .. } => self.quote_depth = self.quote_depth.saturating_sub(1),
            NodeKind::List(_) => self.list_depth = self.list_depth.saturating_sub(1),
            NodeKind::Item => {
                let loose = node.children.iter().any(|c| c.kind == NodeKind::Paragraph);
                wrap_inline_children(&mut node);
                if loose {
                    self.mark_list_loose();
                }
            }
            _ => {}
        }

        self.push(node);
    }

    fn text(&mut self, text: &str) {
        if self.append_literal(text) {
            return;
        }
        if let Some(parent) = self.stack.last_mut() {
            if let Some(Node {
                kind: NodeKind::Text {
                    literal: Some(previous),
                },
                ..
            }) = parent.children.last_mut()
            {
                previous.push_str(text);
                return;
            }
        }
        self.push(Node::text(text));
    }

    /// Append to the literal of an open code or html block
    fn append_literal(&mut self, text: &str) -> bool {
        let Some(open) = self.stack.last_mut() else {
            return false;
        };
        match &mut open.kind {
            NodeKind::CodeBlock { literal, .. } | NodeKind::HtmlBlock { literal } => {
                literal.get_or_insert_with(String::new).push_str(text);
                true
            }
            _ => false,
        }
    }

    fn mark_list_loose(&mut self) {
        if let Some(Node {
            kind: NodeKind::List(info),
            ..
        }) = self.stack.last_mut()
        {
            info.tight = false;
        }
    }

    fn push(&mut self, node: Node) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
        }
    }

    fn finish(mut self) -> Node {
        // Close anything left open by a truncated event stream.
        while self.stack.len() > 1 {
            if let Some(node) = self.stack.pop() {
                self.push(node);
            }
        }
        let mut document = self
            .stack
            .pop()
            .unwrap_or_else(|| Node::new(NodeKind::Document));
        document.link_successors_deep();
        document
    }
}

/// Group runs of inline children into paragraphs
///
/// Tight list items carry their text directly; wrapping it keeps the
/// paragraph separator rules uniform across tight and loose lists.
fn wrap_inline_children(item: &mut Node) {
    if item.children.iter().all(Node::is_block) {
        return;
    }

    let mut children = Vec::with_capacity(item.children.len());
    let mut inline = Vec::new();
    for child in item.children.drain(..) {
        if child.is_block() {
            if !inline.is_empty() {
                let paragraph = std::mem::take(&mut inline);
                children.push(Node::paragraph(paragraph));
            }
            children.push(child);
        } else {
            inline.push(child);
        }
    }
    if !inline.is_empty() {
        children.push(Node::paragraph(inline));
    }
    item.children = children;
}

fn html_inline(html: &str) -> Node {
    Node::new(NodeKind::HtmlInline {
        literal: Some(html.to_string()),
    })
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use markrun_core::{ListType, PARAGRAPH_SEPARATOR};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Compiler, PlainStyler, StaticPrefixBuilder};

    fn compile(markdown: &str) -> String {
        Compiler::new(&PlainStyler, &StaticPrefixBuilder::new())
            .visit(&parse_markdown(markdown))
            .text()
    }

    #[test]
    fn test_parse_paragraphs() {
        let doc = parse_markdown("one\n\ntwo");
        assert_eq!(doc.children.len(), 2);
        assert_eq!(doc.children[0].kind, NodeKind::Paragraph);
        assert!(doc.children[0].has_successor);
        assert!(!doc.children[1].has_successor);
    }

    #[test]
    fn test_parse_heading_level() {
        let doc = parse_markdown("### Third");
        assert_eq!(doc.children[0].kind, NodeKind::Heading { level: 3 });
        assert_eq!(doc.children[0].children[0], Node::text("Third"));
    }

    #[test]
    fn test_parse_fenced_code() {
        let doc = parse_markdown("```rust\nfn main() {}\n```\n");
        assert_eq!(doc.children[0], Node::code_block("fn main() {}\n", Some("rust")));
    }

    #[test]
    fn test_parse_untagged_code() {
        let doc = parse_markdown("    indented\n");
        assert_eq!(doc.children[0].fence_info(), None);
        assert_eq!(doc.children[0].literal(), Some("indented\n"));
    }

    #[test]
    fn test_parse_nested_quote_depths() {
        let doc = parse_markdown("> outer\n>\n> > inner\n");
        let outer = &doc.children[0];
        assert_eq!(outer.kind, NodeKind::BlockQuote { nest_depth: 0 });
        let inner = outer
            .children
            .iter()
            .find(|c| matches!(c.kind, NodeKind::BlockQuote { .. }))
            .map(|c| c.kind.clone());
        assert_eq!(inner, Some(NodeKind::BlockQuote { nest_depth: 1 }));
    }

    #[test]
    fn test_parse_ordered_list_start() {
        let doc = parse_markdown("3. three\n4. four\n");
        let NodeKind::List(info) = &doc.children[0].kind else {
            panic!("expected list, got {:?}", doc.children[0].kind);
        };
        assert_eq!(info.list_type, ListType::Ordered { start: 3 });
        assert_eq!(info.nest_depth, 0);
        assert!(info.tight);
        assert_eq!(doc.children[0].children.len(), 2);
    }

    #[test]
    fn test_tight_items_wrapped_in_paragraphs() {
        let doc = parse_markdown("- a\n- b\n");
        let item = &doc.children[0].children[0];
        assert_eq!(item.kind, NodeKind::Item);
        assert_eq!(item.children[0].kind, NodeKind::Paragraph);
    }

    #[test]
    fn test_loose_list_detected() {
        let doc = parse_markdown("- a\n\n- b\n");
        let NodeKind::List(info) = &doc.children[0].kind else {
            panic!("expected list");
        };
        assert!(!info.tight);
    }

    #[test]
    fn test_nested_list_depth() {
        let doc = parse_markdown("- outer\n  - inner\n");
        let item = &doc.children[0].children[0];
        let nested = item
            .children
            .iter()
            .find_map(|c| match &c.kind {
                NodeKind::List(info) => Some(info.nest_depth),
                _ => None,
            });
        assert_eq!(nested, Some(1));
    }

    #[test]
    fn test_parse_link_and_image() {
        let doc = parse_markdown("[docs](https://example.com \"Docs\") ![cat](cat.png)");
        let para = &doc.children[0];
        assert_eq!(
            para.children[0].kind,
            NodeKind::Link {
                url: "https://example.com".to_string(),
                title: Some("Docs".to_string()),
            }
        );
        let image = para
            .children
            .iter()
            .find(|c| matches!(c.kind, NodeKind::Image { .. }))
            .map(|c| c.kind.clone());
        assert_eq!(
            image,
            Some(NodeKind::Image {
                url: "cat.png".to_string(),
                title: None,
            })
        );
    }

    #[test]
    fn test_parse_html_block() {
        let doc = parse_markdown("<div>\nhi\n</div>\n");
        assert!(matches!(doc.children[0].kind, NodeKind::HtmlBlock { .. }));
        assert_eq!(doc.children[0].literal(), Some("<div>\nhi\n</div>\n"));
    }

    #[test]
    fn test_parse_breaks() {
        let doc = parse_markdown("a\nb  \nc");
        let kinds: Vec<&str> = doc.children[0].children.iter().map(|c| c.kind.name()).collect();
        assert_eq!(kinds, vec!["text", "soft_break", "text", "line_break", "text"]);
    }

    #[test]
    fn test_compile_markdown_document() {
        let text = compile("# Title\n\nBody *text*.\n\n1. one\n2. two\n");
        assert_eq!(
            text,
            format!(
                "Title{P}Body text.{P}1.\tone{P}2.\ttwo",
                P = PARAGRAPH_SEPARATOR
            )
        );
    }

    #[test]
    fn test_compile_nested_markdown_list() {
        let text = compile("1. a\n   1. b\n   2. c\n2. d\n");
        assert_eq!(
            text,
            format!(
                "1.\ta{P}1.\tb{P}2.\tc{P}2.\td",
                P = PARAGRAPH_SEPARATOR
            )
        );
    }
}
