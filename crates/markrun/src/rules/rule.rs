//! Rule and Filter types for styling.

use markrun_core::RunSequence;

use crate::styler::{StyleKind, StyleTarget};

/// Type alias for apply functions
pub type ApplyFn = Box<dyn Fn(&StyleTarget<'_>, &mut RunSequence) + Send + Sync>;

/// A filter determines which nodes a rule applies to
pub enum Filter {
    /// Match a single kind
    Kind(StyleKind),
    /// Match any of multiple kinds
    Kinds(Vec<StyleKind>),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&StyleTarget<'_>) -> bool + Send + Sync>),
}

impl Filter {
    /// Create a filter for a single kind
    pub fn kind(kind: StyleKind) -> Self {
        Filter::Kind(kind)
    }

    /// Create a filter for multiple kinds
    pub fn kinds(kinds: &[StyleKind]) -> Self {
        Filter::Kinds(kinds.to_vec())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&StyleTarget<'_>) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a style target
    pub fn matches(&self, target: &StyleTarget<'_>) -> bool {
        match self {
            Filter::Kind(kind) => target.kind() == *kind,
            Filter::Kinds(kinds) => kinds.contains(&target.kind()),
            Filter::Predicate(f) => f(target),
        }
    }
}

/// A rule defines how to style the runs of a matched node
pub struct StyleRule {
    /// Filter to determine which nodes this rule applies to
    pub filter: Filter,
    /// Function that mutates the runs
    pub apply: ApplyFn,
}

impl StyleRule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, apply: F) -> Self
    where
        F: Fn(&StyleTarget<'_>, &mut RunSequence) + Send + Sync + 'static,
    {
        Self {
            filter,
            apply: Box::new(apply),
        }
    }

    /// Create a rule that matches a single kind
    pub fn for_kind<F>(kind: StyleKind, apply: F) -> Self
    where
        F: Fn(&StyleTarget<'_>, &mut RunSequence) + Send + Sync + 'static,
    {
        Self::new(Filter::kind(kind), apply)
    }

    /// Create a rule that matches multiple kinds
    pub fn for_kinds<F>(kinds: &[StyleKind], apply: F) -> Self
    where
        F: Fn(&StyleTarget<'_>, &mut RunSequence) + Send + Sync + 'static,
    {
        Self::new(Filter::kinds(kinds), apply)
    }

    /// Check if this rule applies to a target
    pub fn matches(&self, target: &StyleTarget<'_>) -> bool {
        self.filter.matches(target)
    }

    /// Apply this rule to the runs
    pub fn apply(&self, target: &StyleTarget<'_>, runs: &mut RunSequence) {
        (self.apply)(target, runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_filter() {
        let filter = Filter::kind(StyleKind::Strong);
        assert!(filter.matches(&StyleTarget::Strong));
        assert!(!filter.matches(&StyleTarget::Emphasis));
    }

    #[test]
    fn test_kinds_filter() {
        let filter = Filter::kinds(&[StyleKind::Code, StyleKind::CodeBlock]);
        assert!(filter.matches(&StyleTarget::Code));
        assert!(filter.matches(&StyleTarget::CodeBlock { fence_info: None }));
        assert!(!filter.matches(&StyleTarget::Text));
    }

    #[test]
    fn test_predicate_filter() {
        let filter = Filter::predicate(|target| matches!(target, StyleTarget::Heading { level: 1 }));
        assert!(filter.matches(&StyleTarget::Heading { level: 1 }));
        assert!(!filter.matches(&StyleTarget::Heading { level: 2 }));
    }

    #[test]
    fn test_rule_apply() {
        let rule = StyleRule::for_kind(StyleKind::Strong, |_, runs| {
            runs.set_attribute("font.weight", 700i64);
        });
        let mut runs = RunSequence::from_text("x");
        assert!(rule.matches(&StyleTarget::Strong));
        rule.apply(&StyleTarget::Strong, &mut runs);
        assert!(runs.runs()[0].attributes.contains("font.weight"));
    }
}
