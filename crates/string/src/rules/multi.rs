//! Cardinality rules, applied once to the whole sequence of values.

use super::{count_arg, measure};
use crate::args::Args;
use crate::error::SpecResult;
use crate::outcome::Outcome;

pub(super) fn min_count(values: &[&str], args: &Args) -> SpecResult<Outcome> {
    let min = count_arg("min-count", args.as_slice(), 0)?;
    Ok(Outcome::check(measure(values.len()) >= min, || {
        format!(
            "You must provide at least {min} values; found {} values.",
            values.len()
        )
    }))
}

pub(super) fn max_count(values: &[&str], args: &Args) -> SpecResult<Outcome> {
    let max = count_arg("max-count", args.as_slice(), 0)?;
    Ok(Outcome::check(measure(values.len()) <= max, || {
        format!(
            "You must provide no more than {max} values; found {} values.",
            values.len()
        )
    }))
}

pub(super) fn exact_count(values: &[&str], args: &Args) -> SpecResult<Outcome> {
    let count = count_arg("exact-count", args.as_slice(), 0)?;
    Ok(Outcome::check(measure(values.len()) == count, || {
        format!(
            "You must provide exactly {count} values; found {} values.",
            values.len()
        )
    }))
}
