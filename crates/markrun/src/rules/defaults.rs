//! Default styling rules.
//!
//! The defaults describe presentation with abstract attributes (see [`attr`]);
//! hosts map them onto fonts, colors and paragraph styles. Inline rules set
//! their attributes outright. Block rules only fill what is still absent, so
//! the styling of nested content survives.

use super::{Filter, StyleRule};
use crate::styler::{StyleKind, StyleTarget};

/// Attribute keys written by the default rules
pub mod attr {
    pub const FONT_WEIGHT: &str = "font.weight";
    pub const FONT_ITALIC: &str = "font.italic";
    pub const FONT_MONOSPACE: &str = "font.monospace";
    pub const FONT_SCALE: &str = "font.scale";
    pub const HEADING_LEVEL: &str = "heading.level";
    pub const PARAGRAPH_INDENT: &str = "paragraph.indent";
    pub const PARAGRAPH_HEAD_INDENT: &str = "paragraph.head_indent";
    pub const QUOTE: &str = "quote";
    pub const LIST_PREFIX: &str = "list.prefix";
    pub const CODE_LANGUAGE: &str = "code.language";
    pub const HTML: &str = "html";
    pub const THEMATIC_BREAK: &str = "rule.thematic";
    pub const LINK_URL: &str = "link.url";
    pub const LINK_TITLE: &str = "link.title";
    pub const IMAGE_URL: &str = "image.url";
    pub const IMAGE_TITLE: &str = "image.title";
}

const REGULAR_WEIGHT: i64 = 400;
const BOLD_WEIGHT: i64 = 700;

/// Font scale per heading level; levels past the table use the last entry
const HEADING_SCALES: &[f64] = &[2.0, 1.5, 1.25, 1.1, 1.0, 0.9];

/// Create all default rules
pub fn default_rules() -> Vec<StyleRule> {
    vec![
        document_rule(),
        heading_rule(),
        block_quote_rule(),
        list_rule(),
        list_item_prefix_rule(),
        item_rule(),
        code_block_rule(),
        html_rule(),
        thematic_break_rule(),
        emphasis_rule(),
        strong_rule(),
        code_rule(),
        link_rule(),
        image_rule(),
    ]
}

fn document_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::Document, |_, runs| {
        runs.set_attribute_if_absent(attr::FONT_WEIGHT, REGULAR_WEIGHT);
        runs.set_attribute_if_absent(attr::FONT_SCALE, 1.0);
    })
}

fn heading_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::Heading, |target, runs| {
        let StyleTarget::Heading { level } = target else {
            return;
        };
        let index = usize::from(level.saturating_sub(1)).min(HEADING_SCALES.len() - 1);
        runs.set_attribute_if_absent(attr::FONT_SCALE, HEADING_SCALES[index]);
        runs.set_attribute_if_absent(attr::FONT_WEIGHT, BOLD_WEIGHT);
        runs.set_attribute(attr::HEADING_LEVEL, i64::from(*level));
    })
}

fn block_quote_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::BlockQuote, |target, runs| {
        let StyleTarget::BlockQuote { nest_depth } = target else {
            return;
        };
        runs.set_attribute_if_absent(attr::PARAGRAPH_INDENT, indent_for_depth(*nest_depth));
        runs.set_attribute(attr::QUOTE, true);
    })
}

fn list_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::List, |target, runs| {
        let StyleTarget::List { nest_depth } = target else {
            return;
        };
        runs.set_attribute_if_absent(attr::PARAGRAPH_INDENT, indent_for_depth(*nest_depth));
    })
}

fn list_item_prefix_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::ListItemPrefix, |_, runs| {
        runs.set_attribute(attr::LIST_PREFIX, true);
    })
}

fn item_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::Item, |target, runs| {
        let StyleTarget::Item { prefix_len } = target else {
            return;
        };
        let prefix_len = i64::try_from(*prefix_len).unwrap_or(i64::MAX);
        runs.set_attribute_if_absent(attr::PARAGRAPH_HEAD_INDENT, prefix_len);
    })
}

fn code_block_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::CodeBlock, |target, runs| {
        runs.set_attribute(attr::FONT_MONOSPACE, true);
        if let StyleTarget::CodeBlock {
            fence_info: Some(info),
        } = target
        {
            runs.set_attribute(attr::CODE_LANGUAGE, *info);
        }
    })
}

fn html_rule() -> StyleRule {
    StyleRule::for_kinds(&[StyleKind::HtmlBlock, StyleKind::HtmlInline], |_, runs| {
        runs.set_attribute(attr::HTML, true);
        runs.set_attribute(attr::FONT_MONOSPACE, true);
    })
}

fn thematic_break_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::ThematicBreak, |_, runs| {
        runs.set_attribute(attr::THEMATIC_BREAK, true);
    })
}

fn emphasis_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::Emphasis, |_, runs| {
        runs.set_attribute(attr::FONT_ITALIC, true);
    })
}

fn strong_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::Strong, |_, runs| {
        runs.set_attribute_if_absent(attr::FONT_WEIGHT, BOLD_WEIGHT);
    })
}

fn code_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::Code, |_, runs| {
        runs.set_attribute(attr::FONT_MONOSPACE, true);
    })
}

fn link_rule() -> StyleRule {
    StyleRule::new(
        Filter::predicate(|target| matches!(target, StyleTarget::Link { url, .. } if !url.is_empty())),
        |target, runs| {
            let StyleTarget::Link { title, url } = target else {
                return;
            };
            runs.set_attribute(attr::LINK_URL, *url);
            if let Some(title) = title {
                runs.set_attribute(attr::LINK_TITLE, *title);
            }
        },
    )
}

fn image_rule() -> StyleRule {
    StyleRule::for_kind(StyleKind::Image, |target, runs| {
        let StyleTarget::Image { title, url } = target else {
            return;
        };
        runs.set_attribute(attr::IMAGE_URL, *url);
        if let Some(title) = title {
            runs.set_attribute(attr::IMAGE_TITLE, *title);
        }
    })
}

fn indent_for_depth(nest_depth: usize) -> i64 {
    i64::try_from(nest_depth).map_or(i64::MAX, |depth| depth.saturating_add(1))
}
