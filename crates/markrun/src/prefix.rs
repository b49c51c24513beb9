//! List prefix builders.
//!
//! A [`PrefixBuilder`] is asked once per list for a fresh generator; the
//! generator is then consumed one value per item, in item order.

use markrun_core::{ListInfo, ListType, DEFAULT_BULLET};

/// Generator of item prefixes for one list
pub type Prefixes = Box<dyn Iterator<Item = String>>;

/// Builds a prefix generator for a list
pub trait PrefixBuilder {
    fn build(&self, list: &ListInfo) -> Prefixes;
}

impl<F, I> PrefixBuilder for F
where
    F: Fn(&ListInfo) -> I,
    I: Iterator<Item = String> + 'static,
{
    fn build(&self, list: &ListInfo) -> Prefixes {
        Box::new(self(list))
    }
}

/// Numbers ordered lists from their start value and bullets the rest
#[derive(Debug, Clone)]
pub struct StaticPrefixBuilder {
    bullet: String,
}

impl StaticPrefixBuilder {
    pub fn new() -> Self {
        Self::with_bullet(DEFAULT_BULLET)
    }

    pub fn with_bullet(bullet: &str) -> Self {
        Self {
            bullet: bullet.to_string(),
        }
    }
}

impl Default for StaticPrefixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixBuilder for StaticPrefixBuilder {
    fn build(&self, list: &ListInfo) -> Prefixes {
        match list.list_type {
            ListType::Ordered { start } => Box::new((start..).map(|n| format!("{}.", n))),
            ListType::Bullet => Box::new(std::iter::repeat(self.bullet.clone())),
        }
    }
}
