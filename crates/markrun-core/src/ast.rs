//! Document tree consumed by the compiler
//!
//! The tree is produced by an external markdown parser. Every node carries its
//! ordered children, a has-successor flag and kind-specific data. The compiler
//! never validates the tree; missing data degrades to empty output.

/// List marker style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    /// Unordered list
    Bullet,
    /// Ordered list counting from `start`
    Ordered { start: u64 },
}

/// List metadata handed to prefix builders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListInfo {
    pub list_type: ListType,
    /// Number of enclosing lists (0 for a top-level list)
    pub nest_depth: usize,
    /// Tight lists have no blank lines between items
    pub tight: bool,
}

impl ListInfo {
    pub fn bullet(nest_depth: usize) -> Self {
        Self {
            list_type: ListType::Bullet,
            nest_depth,
            tight: true,
        }
    }

    pub fn ordered(start: u64, nest_depth: usize) -> Self {
        Self {
            list_type: ListType::Ordered { start },
            nest_depth,
            tight: true,
        }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self.list_type, ListType::Ordered { .. })
    }
}

/// The kind of a node together with its kind-specific data
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root document container
    Document,

    /// Block quote; `nest_depth` counts enclosing block quotes
    BlockQuote { nest_depth: usize },

    /// Ordered or bullet list
    List(ListInfo),

    /// List item
    Item,

    /// Fenced or indented code block
    CodeBlock {
        literal: Option<String>,
        fence_info: Option<String>,
    },

    /// Raw HTML block
    HtmlBlock { literal: Option<String> },

    /// Parser extension block
    CustomBlock { literal: Option<String> },

    /// Paragraph containing inline content
    Paragraph,

    /// Heading with 1-based level
    Heading { level: u8 },

    /// Thematic break (horizontal rule)
    ThematicBreak,

    /// Plain text
    Text { literal: Option<String> },

    /// Soft line break
    SoftBreak,

    /// Hard line break
    LineBreak,

    /// Inline code
    Code { literal: Option<String> },

    /// Raw HTML inline
    HtmlInline { literal: Option<String> },

    /// Parser extension inline
    CustomInline { literal: Option<String> },

    /// Emphasis (italic)
    Emphasis,

    /// Strong emphasis (bold)
    Strong,

    /// Link with url and optional title
    Link { url: String, title: Option<String> },

    /// Image with url and optional title; children hold the alt text
    Image { url: String, title: Option<String> },

    /// A node type this compiler does not know about
    Unknown { name: String },
}

impl NodeKind {
    /// Short lowercase name of the kind, used in logs and dumps
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Document => "document",
            NodeKind::BlockQuote { .. } => "block_quote",
            NodeKind::List(_) => "list",
            NodeKind::Item => "item",
            NodeKind::CodeBlock { .. } => "code_block",
            NodeKind::HtmlBlock { .. } => "html_block",
            NodeKind::CustomBlock { .. } => "custom_block",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading { .. } => "heading",
            NodeKind::ThematicBreak => "thematic_break",
            NodeKind::Text { .. } => "text",
            NodeKind::SoftBreak => "soft_break",
            NodeKind::LineBreak => "line_break",
            NodeKind::Code { .. } => "code",
            NodeKind::HtmlInline { .. } => "html_inline",
            NodeKind::CustomInline { .. } => "custom_inline",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strong => "strong",
            NodeKind::Link { .. } => "link",
            NodeKind::Image { .. } => "image",
            NodeKind::Unknown { name } => name,
        }
    }
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    /// True if a later sibling exists at the same level
    pub has_successor: bool,
}

impl Node {
    /// Create a childless node without a successor
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            has_successor: false,
        }
    }

    pub fn document(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Document).with_children(children)
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Paragraph).with_children(children)
    }

    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Heading { level }).with_children(children)
    }

    pub fn block_quote(nest_depth: usize, children: Vec<Node>) -> Self {
        Self::new(NodeKind::BlockQuote { nest_depth }).with_children(children)
    }

    pub fn list(info: ListInfo, items: Vec<Node>) -> Self {
        Self::new(NodeKind::List(info)).with_children(items)
    }

    pub fn item(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Item).with_children(children)
    }

    pub fn code_block(literal: &str, fence_info: Option<&str>) -> Self {
        Self::new(NodeKind::CodeBlock {
            literal: Some(literal.to_string()),
            fence_info: fence_info.map(str::to_string),
        })
    }

    pub fn html_block(literal: &str) -> Self {
        Self::new(NodeKind::HtmlBlock {
            literal: Some(literal.to_string()),
        })
    }

    pub fn thematic_break() -> Self {
        Self::new(NodeKind::ThematicBreak)
    }

    pub fn text(literal: &str) -> Self {
        Self::new(NodeKind::Text {
            literal: Some(literal.to_string()),
        })
    }

    pub fn code(literal: &str) -> Self {
        Self::new(NodeKind::Code {
            literal: Some(literal.to_string()),
        })
    }

    pub fn soft_break() -> Self {
        Self::new(NodeKind::SoftBreak)
    }

    pub fn line_break() -> Self {
        Self::new(NodeKind::LineBreak)
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Emphasis).with_children(children)
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Strong).with_children(children)
    }

    pub fn link(url: &str, title: Option<&str>, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Link {
            url: url.to_string(),
            title: title.map(str::to_string),
        })
        .with_children(children)
    }

    pub fn image(url: &str, title: Option<&str>, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Image {
            url: url.to_string(),
            title: title.map(str::to_string),
        })
        .with_children(children)
    }

    /// Replace the children and link their has-successor flags
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self.link_successors();
        self
    }

    /// Override the has-successor flag
    pub fn with_successor(mut self, has_successor: bool) -> Self {
        self.has_successor = has_successor;
        self
    }

    /// Mark every child except the last as having a successor
    pub fn link_successors(&mut self) {
        let count = self.children.len();
        for (i, child) in self.children.iter_mut().enumerate() {
            child.has_successor = i + 1 < count;
        }
    }

    /// Recursively relink has-successor flags across the whole subtree
    pub fn link_successors_deep(&mut self) {
        self.link_successors();
        for child in &mut self.children {
            child.link_successors_deep();
        }
    }

    /// Literal text carried by leaf kinds
    pub fn literal(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::CodeBlock { literal, .. }
            | NodeKind::HtmlBlock { literal }
            | NodeKind::CustomBlock { literal }
            | NodeKind::Text { literal }
            | NodeKind::Code { literal }
            | NodeKind::HtmlInline { literal }
            | NodeKind::CustomInline { literal } => literal.as_deref(),
            _ => None,
        }
    }

    /// Check if this node is block-level
    pub fn is_block(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Document
                | NodeKind::BlockQuote { .. }
                | NodeKind::List(_)
                | NodeKind::Item
                | NodeKind::CodeBlock { .. }
                | NodeKind::HtmlBlock { .. }
                | NodeKind::CustomBlock { .. }
                | NodeKind::Paragraph
                | NodeKind::Heading { .. }
                | NodeKind::ThematicBreak
        )
    }

    pub fn is_code_block(&self) -> bool {
        matches!(self.kind, NodeKind::CodeBlock { .. })
    }

    /// Fence info of a code block, if any
    pub fn fence_info(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::CodeBlock { fence_info, .. } => fence_info.as_deref(),
            _ => None,
        }
    }
}
