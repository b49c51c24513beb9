//! Rule system for styling compiled runs.

mod defaults;
mod rule;

pub use defaults::{attr, default_rules};
pub use rule::{ApplyFn, Filter, StyleRule};

use indexmap::IndexMap;
use markrun_core::RunSequence;

use crate::styler::{StyleTarget, Styler};

/// Collection of styling rules
///
/// Every matching rule is applied: custom rules first, in insertion order,
/// then the built-in defaults. Defaults only fill attributes that are still
/// absent, so custom rules take precedence.
pub struct StyleRules {
    /// Custom rules added by the user (applied first)
    custom_rules: IndexMap<String, StyleRule>,
    /// Built-in default rules
    default_rules: Vec<StyleRule>,
}

impl StyleRules {
    /// Create a new StyleRules instance with the default rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            default_rules: default_rules(),
        }
    }

    /// Create a StyleRules instance without any built-in rules
    pub fn without_defaults() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            default_rules: Vec::new(),
        }
    }

    /// Add a custom rule, replacing any rule with the same key
    pub fn add_rule(&mut self, key: &str, rule: StyleRule) -> &mut Self {
        self.custom_rules.insert(key.to_string(), rule);
        self
    }

    /// Remove a custom rule
    pub fn remove_rule(&mut self, key: &str) -> Option<StyleRule> {
        self.custom_rules.shift_remove(key)
    }

    /// Keys of the custom rules in application order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.custom_rules.keys().map(String::as_str)
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// All rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.custom_rules.values().chain(self.default_rules.iter())
    }
}

impl Default for StyleRules {
    fn default() -> Self {
        Self::new()
    }
}

impl Styler for StyleRules {
    fn style(&self, target: &StyleTarget<'_>, runs: &mut RunSequence) {
        for rule in self.iter().filter(|rule| rule.matches(target)) {
            rule.apply(target, runs);
        }
    }
}
