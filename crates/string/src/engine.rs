//! Spec checking and evaluation.
//!
//! [`validate_spec`] rejects unknown rule names before any value is touched.
//! [`Evaluation`] runs a spec against a string or list of strings and returns
//! the first failure as a [`Verdict`].

use std::borrow::Cow;

use serde_json::Value;

use crate::args::Args;
use crate::error::{SpecError, SpecResult};
use crate::outcome::{Outcome, Verdict};
use crate::registry::Registry;
use crate::rules::{self, Rule};
use crate::spec::Spec;

/// Rule whose option set is always handed over as a single argument.
const ONE_OF: &str = "one-of";

/// Checks that every rule named in `spec` is a core rule or is registered in
/// `auxiliary`. Fails on the first unknown name.
pub fn validate_spec(spec: &Spec, auxiliary: Option<&Registry>) -> SpecResult<()> {
    for name in spec.names() {
        let known = rules::is_core_rule(name) || auxiliary.is_some_and(|aux| aux.contains(name));
        if !known {
            return Err(SpecError::unknown_rule(name, auxiliary.is_some()));
        }
    }
    Ok(())
}

/// Evaluates `spec` against `value`, checking the spec first.
///
/// `value` is a JSON string or an array of JSON strings.
///
/// ```
/// use specify_string::{evaluate, Spec, Verdict};
/// use serde_json::json;
///
/// let spec = Spec::new().rule("min-length", 3);
/// assert_eq!(evaluate(&spec, &json!("bye"), None).unwrap(), Verdict::Valid);
/// assert!(!evaluate(&spec, &json!("hi"), None).unwrap().is_valid());
/// ```
pub fn evaluate(spec: &Spec, value: &Value, auxiliary: Option<&Registry>) -> SpecResult<Verdict> {
    let mut evaluation = Evaluation::new().spec(spec).value(value);
    if let Some(auxiliary) = auxiliary {
        evaluation = evaluation.auxiliary(auxiliary);
    }
    evaluation.run()
}

/// A single evaluation request.
///
/// Missing spec and missing value are reported as distinct configuration
/// errors, so a caller can tell programmer error from input failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluation<'a> {
    spec: Option<&'a Spec>,
    value: Option<&'a Value>,
    auxiliary: Option<&'a Registry>,
    skip_type_check: bool,
}

impl<'a> Evaluation<'a> {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spec to evaluate.
    pub fn spec(mut self, spec: &'a Spec) -> Self {
        self.spec = Some(spec);
        self
    }

    /// Set the value: a string, or an array of strings.
    pub fn value(mut self, value: &'a Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the registry of caller-supplied rules.
    pub fn auxiliary(mut self, auxiliary: &'a Registry) -> Self {
        self.auxiliary = Some(auxiliary);
        self
    }

    /// Accept non-string elements; they are evaluated through their JSON text.
    pub fn skip_type_check(mut self, skip: bool) -> Self {
        self.skip_type_check = skip;
        self
    }

    /// Checks the spec, then evaluates it.
    pub fn run(&self) -> SpecResult<Verdict> {
        let spec = self.spec.ok_or(SpecError::MissingSpec)?;
        let value = self.value.ok_or(SpecError::MissingValue)?;
        validate_spec(spec, self.auxiliary)?;
        run_checked(spec, value, self.auxiliary, self.skip_type_check)
    }
}

/// Evaluates a spec whose rule names are already known to resolve.
pub(crate) fn run_checked(
    spec: &Spec,
    value: &Value,
    auxiliary: Option<&Registry>,
    skip_type_check: bool,
) -> SpecResult<Verdict> {
    let elements = elements(value, skip_type_check)?;
    let elements: Vec<&str> = elements.iter().map(AsRef::as_ref).collect();

    for (name, entry) in spec.iter() {
        tracing::trace!(rule = name, elements = elements.len(), "evaluating rule");

        if let Some(rule) = rules::multi_rule(name) {
            if let Outcome::Fail(message) = rule(&elements, entry.args())? {
                tracing::debug!(rule = name, "multi-value rule failed");
                return Ok(Verdict::Invalid(
                    message.unwrap_or_else(|| format!("Values failed validation '{name}'.")),
                ));
            }
            continue;
        }

        let builtin = rules::single_rule(name);
        let rule: &dyn Rule = match (&builtin, auxiliary.and_then(|aux| aux.get(name))) {
            (Some(builtin), _) => builtin,
            (None, Some(aux)) => aux.as_ref(),
            (None, None) => return Err(SpecError::unknown_rule(name, auxiliary.is_some())),
        };

        let collapsed;
        let args = if name == ONE_OF {
            collapsed = entry.args().collapsed();
            &collapsed
        } else {
            entry.args()
        };

        if let Some(message) = first_failure(name, rule, &elements, args)? {
            return Ok(Verdict::Invalid(message));
        }
    }

    Ok(Verdict::Valid)
}

fn first_failure(
    name: &str,
    rule: &dyn Rule,
    elements: &[&str],
    args: &Args,
) -> SpecResult<Option<String>> {
    for element in elements {
        if let Outcome::Fail(message) = rule.check(element, args.as_slice())? {
            tracing::debug!(rule = name, element, "rule failed");
            return Ok(Some(message.unwrap_or_else(|| {
                format!("Value '{element}' failed validation '{name}'.")
            })));
        }
    }
    Ok(None)
}

/// Normalizes the value into a sequence of strings, enforcing the string-type
/// guard unless it is skipped.
fn elements(value: &Value, skip_type_check: bool) -> SpecResult<Vec<Cow<'_, str>>> {
    let values: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    if !skip_type_check && values.iter().any(|v| !v.is_string()) {
        let found: Vec<Cow<'_, str>> = values.iter().map(|v| render(v)).collect();
        return Err(SpecError::NotAString {
            found: found.join("', '"),
        });
    }

    Ok(values.into_iter().map(render).collect())
}

fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
