//! Registry of caller-supplied rules.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::rules::Rule;

/// Caller-supplied rules, keyed by name.
///
/// Consulted after the core tables, so a name that is also a core rule is
/// never reached through the registry.
///
/// Rules are stored as `Arc<dyn Rule>`, so a registry is cheap to clone and
/// can be shared across threads.
///
/// # Example
///
/// ```rust
/// use specify_string::{Arg, Registry};
///
/// let registry = Registry::new()
///     .with("lowercase", |value: &str, _: &[Arg]| {
///         value.chars().all(|c| !c.is_uppercase())
///     });
///
/// assert!(registry.contains("lowercase"));
/// assert!(!registry.contains("uppercase"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    rules: HashMap<String, Arc<dyn Rule>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule. Overwrites any existing rule with the same name.
    pub fn register(&mut self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.rules.insert(name.into(), Arc::new(rule));
    }

    /// Register an already shared rule.
    pub fn register_shared(&mut self, name: impl Into<String>, rule: Arc<dyn Rule>) {
        self.rules.insert(name.into(), rule);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.register(name, rule);
        self
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Rule>> {
        self.rules.get(name)
    }

    /// Check whether a rule with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Remove a rule by name. Returns the removed rule, if any.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Rule>> {
        self.rules.remove(name)
    }

    /// Names of all registered rules, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("count", &self.rules.len())
            .field("names", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}
