//! Rule interface and the built-in rule tables.
//!
//! Core rules live in two process-wide tables: multi-value rules see the whole
//! sequence of values once, single-value rules see each element in turn.
//! Lookups check the multi-value table first, then the single-value table.

mod multi;
mod single;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::args::{Arg, Args};
use crate::error::{SpecError, SpecResult};
use crate::outcome::{IntoOutcome, Outcome};

/// A named check applied to one element at a time.
///
/// Implemented for every `Fn(&str, &[Arg]) -> R` where `R: IntoOutcome`, so
/// plain closures work as auxiliary rules:
///
/// ```
/// use specify_string::{Arg, Registry};
///
/// let registry = Registry::new()
///     .with("no-spaces", |value: &str, _: &[Arg]| !value.contains(' '));
/// assert!(registry.contains("no-spaces"));
/// ```
pub trait Rule: Send + Sync {
    /// Checks `element` against the rule with the given positional arguments.
    fn check(&self, element: &str, args: &[Arg]) -> SpecResult<Outcome>;
}

impl<F, R> Rule for F
where
    F: Fn(&str, &[Arg]) -> R + Send + Sync,
    R: IntoOutcome,
{
    fn check(&self, element: &str, args: &[Arg]) -> SpecResult<Outcome> {
        self(element, args).into_outcome()
    }
}

/// Built-in single-value rule.
pub type SingleRule = fn(&str, &[Arg]) -> SpecResult<Outcome>;

/// Built-in multi-value rule: receives every value and the unspread arguments.
pub type MultiRule = fn(&[&str], &Args) -> SpecResult<Outcome>;

static MULTI_RULES: LazyLock<HashMap<&'static str, MultiRule>> = LazyLock::new(|| {
    HashMap::from([
        ("min-count", multi::min_count as MultiRule),
        ("max-count", multi::max_count),
        ("exact-count", multi::exact_count),
    ])
});

static SINGLE_RULES: LazyLock<HashMap<&'static str, SingleRule>> = LazyLock::new(|| {
    HashMap::from([
        ("min-length", single::min_length as SingleRule),
        ("max-length", single::max_length),
        ("exact-length", single::exact_length),
        ("one-of", single::one_of),
        ("match-re", single::match_re),
        ("after", single::after),
        ("before", single::before),
        ("between", single::between),
    ])
});

/// Looks up a built-in multi-value rule.
pub fn multi_rule(name: &str) -> Option<MultiRule> {
    MULTI_RULES.get(name).copied()
}

/// Looks up a built-in single-value rule.
pub fn single_rule(name: &str) -> Option<SingleRule> {
    SINGLE_RULES.get(name).copied()
}

/// Returns `true` if `name` is a built-in rule of either kind.
pub fn is_core_rule(name: &str) -> bool {
    MULTI_RULES.contains_key(name) || SINGLE_RULES.contains_key(name)
}

/// Names of every built-in rule: multi-value rules first, each group sorted.
pub fn core_rule_names() -> Vec<&'static str> {
    let mut multi: Vec<_> = MULTI_RULES.keys().copied().collect();
    let mut single: Vec<_> = SINGLE_RULES.keys().copied().collect();
    multi.sort_unstable();
    single.sort_unstable();
    multi.extend(single);
    multi
}

// ============================================================================
// ARGUMENT HELPERS
// ============================================================================

/// Reads the count parameter at `index`.
pub(crate) fn count_arg(rule: &str, args: &[Arg], index: usize) -> SpecResult<i64> {
    let arg = args.get(index);
    arg.and_then(Arg::as_count)
        .ok_or_else(|| SpecError::invalid_argument(rule, "an integer", found(arg)))
}

/// A length or count, widened for comparison against a signed bound.
pub(crate) fn measure(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Reads the string parameter at `index`.
pub(crate) fn string_arg<'a>(rule: &str, args: &'a [Arg], index: usize) -> SpecResult<&'a str> {
    let arg = args.get(index);
    arg.and_then(Arg::as_str)
        .ok_or_else(|| SpecError::invalid_argument(rule, "a string", found(arg)))
}

pub(crate) fn found(arg: Option<&Arg>) -> String {
    arg.map_or_else(|| "nothing".to_owned(), Arg::describe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tables_do_not_overlap() {
        for name in MULTI_RULES.keys() {
            assert!(!SINGLE_RULES.contains_key(name), "{name} is in both tables");
        }
    }

    #[test]
    fn lookups() {
        assert!(multi_rule("min-count").is_some());
        assert!(multi_rule("min-length").is_none());
        assert!(single_rule("min-length").is_some());
        assert!(single_rule("between").is_some());
        assert!(is_core_rule("exact-count"));
        assert!(!is_core_rule("isEmail"));
    }

    #[test]
    fn names_list_multi_first() {
        assert_eq!(
            core_rule_names(),
            vec![
                "exact-count",
                "max-count",
                "min-count",
                "after",
                "before",
                "between",
                "exact-length",
                "match-re",
                "max-length",
                "min-length",
                "one-of",
            ]
        );
    }

    #[test]
    fn closures_are_rules() {
        let rule = |value: &str, args: &[Arg]| value.len() > args.len();
        assert_eq!(rule.check("ab", &[]).unwrap(), Outcome::Pass);
        assert_eq!(
            rule.check("", &[]).unwrap(),
            Outcome::Fail(None)
        );
    }

    #[test]
    fn count_arg_rejects_bad_shapes() {
        let args = [Arg::Value(json!("three"))];
        let err = count_arg("min-length", &args, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'min-length' expects an integer; got \"three\"."
        );

        let err = count_arg("min-length", &[], 0).unwrap_err();
        assert!(err.to_string().ends_with("got nothing."));
    }
}
