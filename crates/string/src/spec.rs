//! Validation specifications.
//!
//! A [`Spec`] is an ordered mapping from rule name to parameters. Order is
//! significant: rules run in the order they were declared and the first
//! failure wins.
//!
//! ```
//! use specify_string::Spec;
//! use serde_json::json;
//!
//! let built = Spec::new().rule("min-length", 3).rule("max-length", 20);
//! let parsed = Spec::from_json(json!({ "min-length": 3, "max-length": 20 })).unwrap();
//!
//! assert_eq!(built.names().collect::<Vec<_>>(), parsed.names().collect::<Vec<_>>());
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::args::{Args, Param};
use crate::error::{SpecError, SpecResult};

/// One rule of a spec: the authored parameters and their normalized form.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    param: Param,
    args: Args,
}

impl RuleEntry {
    fn new(param: Param) -> Self {
        let args = Args::normalize(&param);
        Self { param, args }
    }

    /// Parameters as authored.
    pub fn param(&self) -> &Param {
        &self.param
    }

    /// Parameters as handed to the rule.
    pub fn args(&self) -> &Args {
        &self.args
    }
}

/// Ordered rule-name to parameters mapping.
#[derive(Debug, Clone, Default)]
pub struct Spec {
    rules: IndexMap<String, RuleEntry>,
}

impl Spec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn rule(mut self, name: impl Into<String>, param: impl Into<Param>) -> Self {
        self.insert(name, param);
        self
    }

    /// Adds a rule. Re-adding a name replaces its parameters but keeps its
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, param: impl Into<Param>) {
        self.rules.insert(name.into(), RuleEntry::new(param.into()));
    }

    /// Parses a JSON object of `rule-name: parameters` pairs, keeping key order.
    pub fn from_json(document: Value) -> SpecResult<Self> {
        match document {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(SpecError::InvalidSpec {
                found: other.to_string(),
            }),
        }
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&RuleEntry> {
        self.rules.get(name)
    }

    /// Check whether the spec names a rule.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Rule names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// `(name, entry)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.rules.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the spec has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K, P> FromIterator<(K, P)> for Spec
where
    K: Into<String>,
    P: Into<Param>,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut spec = Self::new();
        for (name, param) in iter {
            spec.insert(name, param);
        }
        spec
    }
}

impl TryFrom<Value> for Spec {
    type Error = SpecError;

    fn try_from(document: Value) -> SpecResult<Self> {
        Self::from_json(document)
    }
}

impl<'de> Deserialize<'de> for Spec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, Value>::deserialize(deserializer).map(|rules| rules.into_iter().collect())
    }
}
