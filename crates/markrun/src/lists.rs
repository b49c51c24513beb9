//! List context stack.
//!
//! One generator is pushed per entered list and popped when the returned
//! [`ListScope`] drops, so the stack depth always equals the list nesting
//! depth of the node being visited, including while unwinding.

use std::ops::{Deref, DerefMut};

use markrun_core::ListInfo;

use crate::prefix::{PrefixBuilder, Prefixes};

/// Stack of prefix generators for the currently open lists
#[derive(Default)]
pub struct ListStack {
    generators: Vec<Prefixes>,
}

impl ListStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a generator for `list` and push it for the lifetime of the scope
    pub fn enter<P>(&mut self, builder: &P, list: &ListInfo) -> ListScope<'_>
    where
        P: PrefixBuilder + ?Sized,
    {
        self.generators.push(builder.build(list));
        ListScope { stack: self }
    }

    /// Next prefix of the innermost open list
    ///
    /// Returns `None` outside any list or when the generator is exhausted.
    pub fn next_prefix(&mut self) -> Option<String> {
        self.generators.last_mut()?.next()
    }

    /// Number of open lists
    pub fn depth(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    fn exit(&mut self) {
        self.generators.pop();
    }
}

impl std::fmt::Debug for ListStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListStack")
            .field("depth", &self.depth())
            .finish()
    }
}

/// Guard for one open list; pops the list's generator on drop
pub struct ListScope<'s> {
    stack: &'s mut ListStack,
}

impl Deref for ListScope<'_> {
    type Target = ListStack;

    fn deref(&self) -> &ListStack {
        self.stack
    }
}

impl DerefMut for ListScope<'_> {
    fn deref_mut(&mut self) -> &mut ListStack {
        self.stack
    }
}

impl Drop for ListScope<'_> {
    fn drop(&mut self) {
        self.stack.exit();
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::prefix::StaticPrefixBuilder;

    #[test]
    fn test_enter_and_exit() {
        let builder = StaticPrefixBuilder::new();
        let mut stack = ListStack::new();
        {
            let mut scope = stack.enter(&builder, &ListInfo::ordered(1, 0));
            assert_eq!(scope.depth(), 1);
            assert_eq!(scope.next_prefix().as_deref(), Some("1."));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_stack_has_no_prefix() {
        let mut stack = ListStack::new();
        assert_eq!(stack.next_prefix(), None);
    }

    #[test]
    fn test_nested_scope_resumes_outer() {
        let builder = StaticPrefixBuilder::new();
        let mut stack = ListStack::new();
        let mut outer = stack.enter(&builder, &ListInfo::ordered(1, 0));
        assert_eq!(outer.next_prefix().as_deref(), Some("1."));
        {
            let mut inner = outer.enter(&builder, &ListInfo::ordered(10, 1));
            assert_eq!(inner.depth(), 2);
            assert_eq!(inner.next_prefix().as_deref(), Some("10."));
            assert_eq!(inner.next_prefix().as_deref(), Some("11."));
        }
        assert_eq!(outer.depth(), 1);
        assert_eq!(outer.next_prefix().as_deref(), Some("2."));
    }

    #[test]
    fn test_exhausted_generator() {
        let builder = |_: &ListInfo| std::iter::once("only".to_string());
        let mut stack = ListStack::new();
        let mut scope = stack.enter(&builder, &ListInfo::bullet(0));
        assert_eq!(scope.next_prefix().as_deref(), Some("only"));
        assert_eq!(scope.next_prefix(), None);
    }

    #[test]
    fn test_scope_pops_while_unwinding() {
        let builder = StaticPrefixBuilder::new();
        let mut stack = ListStack::new();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut scope = stack.enter(&builder, &ListInfo::bullet(0));
            let _inner = scope.enter(&builder, &ListInfo::bullet(1));
            panic!("collaborator failed");
        }));

        assert!(result.is_err());
        assert_eq!(stack.depth(), 0);
    }
}
