//! Per-element rules: lengths, option sets, patterns, lexicographic bounds.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{count_arg, found, measure, string_arg};
use crate::args::Arg;
use crate::error::{SpecError, SpecResult};
use crate::outcome::Outcome;

/// Separator for comma-delimited option lists.
static OPTION_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("option separator pattern is valid"));

// ============================================================================
// LENGTH
// ============================================================================

fn char_len(value: &str) -> i64 {
    measure(value.chars().count())
}

pub(super) fn min_length(value: &str, args: &[Arg]) -> SpecResult<Outcome> {
    let min = count_arg("min-length", args, 0)?;
    let len = char_len(value);
    Ok(Outcome::check(len >= min, || {
        format!("Value must be at least {min} characters long; found {len} characters.")
    }))
}

pub(super) fn max_length(value: &str, args: &[Arg]) -> SpecResult<Outcome> {
    let max = count_arg("max-length", args, 0)?;
    let len = char_len(value);
    Ok(Outcome::check(len <= max, || {
        format!("Value must be at most {max} characters long; found {len} characters.")
    }))
}

pub(super) fn exact_length(value: &str, args: &[Arg]) -> SpecResult<Outcome> {
    let length = count_arg("exact-length", args, 0)?;
    let len = char_len(value);
    Ok(Outcome::check(len == length, || {
        format!("Value must be exactly {length} characters long; found {len} characters.")
    }))
}

// ============================================================================
// ONE OF
// ============================================================================

/// Options come either as a list of strings or as one comma-separated string.
fn options<'a>(args: &'a [Arg]) -> SpecResult<Vec<&'a str>> {
    const EXPECTED: &str = "a list of strings or a comma-separated string";
    let invalid = || SpecError::invalid_argument("one-of", EXPECTED, found(args.first()));

    match args.first().and_then(Arg::as_value) {
        Some(Value::String(list)) => Ok(OPTION_SEPARATOR.split(list).collect()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().ok_or_else(invalid))
            .collect(),
        _ => Err(invalid()),
    }
}

pub(super) fn one_of(value: &str, args: &[Arg]) -> SpecResult<Outcome> {
    let options = options(args)?;
    Ok(Outcome::check(options.contains(&value), || {
        format!(
            "Value must be one of '{}'; got '{value}'.",
            options.join("', '")
        )
    }))
}

// ============================================================================
// MATCH RE
// ============================================================================

/// Pattern source is compiled on every call; nothing is cached.
pub(super) fn match_re(value: &str, args: &[Arg]) -> SpecResult<Outcome> {
    let pattern: Cow<'_, Regex> = match args.first() {
        Some(Arg::Pattern(pattern)) => Cow::Borrowed(pattern),
        Some(Arg::Value(Value::String(source))) => {
            Cow::Owned(Regex::new(source).map_err(|source_err| SpecError::InvalidPattern {
                pattern: source.clone(),
                source: source_err,
            })?)
        }
        other => {
            return Err(SpecError::invalid_argument(
                "match-re",
                "a pattern or pattern source",
                found(other),
            ));
        }
    };

    Ok(Outcome::check(pattern.is_match(value), || {
        format!("Value must match /{}/; got '{value}'.", pattern.as_str())
    }))
}

// ============================================================================
// LEXICOGRAPHIC BOUNDS
// ============================================================================

pub(super) fn after(value: &str, args: &[Arg]) -> SpecResult<Outcome> {
    let bound = string_arg("after", args, 0)?;
    Ok(Outcome::check(value > bound, || {
        format!("Value must sort after '{bound}'; got '{value}'.")
    }))
}

pub(super) fn before(value: &str, args: &[Arg]) -> SpecResult<Outcome> {
    let bound = string_arg("before", args, 0)?;
    Ok(Outcome::check(value < bound, || {
        format!("Value must sort before '{bound}'; got '{value}'.")
    }))
}

/// Exclusive on both ends.
pub(super) fn between(value: &str, args: &[Arg]) -> SpecResult<Outcome> {
    let low = string_arg("between", args, 0)?;
    let high = string_arg("between", args, 1)?;
    Ok(Outcome::check(low < value && value < high, || {
        format!("Value must sort between '{low}' and '{high}'; got '{value}'.")
    }))
}
