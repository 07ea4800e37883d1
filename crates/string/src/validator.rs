//! Reusable validator bound to one spec.

use serde_json::Value;

use crate::engine::{run_checked, validate_spec};
use crate::error::SpecResult;
use crate::outcome::Verdict;
use crate::registry::Registry;
use crate::spec::Spec;

/// A spec (and optional auxiliary registry) checked once and evaluated many
/// times.
///
/// Construction fails if the spec names an unknown rule; evaluation never
/// repeats that check.
///
/// ```
/// use specify_string::{Spec, Validator};
/// use serde_json::json;
///
/// let validator = Validator::new(Spec::new().rule("min-length", 3)).unwrap();
/// assert!(validator.validate_one(&json!("bye")).unwrap().is_valid());
/// assert!(!validator.validate_one(&json!("hi")).unwrap().is_valid());
///
/// assert!(Validator::new(Spec::new().rule("foo", 1)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    spec: Spec,
    auxiliary: Option<Registry>,
}

impl Validator {
    /// Bind a spec that uses core rules only.
    pub fn new(spec: Spec) -> SpecResult<Self> {
        Self::bind(spec, None)
    }

    /// Bind a spec together with caller-supplied rules.
    pub fn with_auxiliary(spec: Spec, auxiliary: Registry) -> SpecResult<Self> {
        Self::bind(spec, Some(auxiliary))
    }

    fn bind(spec: Spec, auxiliary: Option<Registry>) -> SpecResult<Self> {
        validate_spec(&spec, auxiliary.as_ref())?;
        tracing::debug!(
            rules = spec.len(),
            auxiliary = auxiliary.as_ref().map_or(0, Registry::len),
            "validator bound"
        );
        Ok(Self { spec, auxiliary })
    }

    /// Evaluates the bound spec against `value`: a string or an array of
    /// strings.
    pub fn validate_one(&self, value: &Value) -> SpecResult<Verdict> {
        run_checked(&self.spec, value, self.auxiliary.as_ref(), false)
    }

    /// The bound spec.
    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    /// The bound auxiliary registry, if any.
    pub fn auxiliary(&self) -> Option<&Registry> {
        self.auxiliary.as_ref()
    }
}
