//! Rule outcomes and evaluation verdicts.

use std::fmt;

use crate::error::{SpecError, SpecResult};

/// Result of applying one rule to one element (or, for multi-value rules, to
/// the whole sequence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The rule accepted the input.
    Pass,
    /// The rule rejected the input. `None` asks the engine to synthesize a
    /// generic message naming the element and rule.
    Fail(Option<String>),
}

impl Outcome {
    /// A failure carrying a ready-to-display message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(Some(message.into()))
    }

    /// Returns `true` if the rule accepted the input.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// `Pass` when `ok`, otherwise a failure with the lazily built message.
    pub(crate) fn check(ok: bool, message: impl FnOnce() -> String) -> Self {
        if ok { Self::Pass } else { Self::fail(message()) }
    }
}

/// Conversion from whatever a rule returns into an [`Outcome`].
///
/// Lets auxiliary rules be written with the most natural return type:
/// a `bool`, a failure message, a `Result`, or an explicit `Outcome`.
pub trait IntoOutcome {
    /// Interpret `self` as a rule outcome.
    fn into_outcome(self) -> SpecResult<Outcome>;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> SpecResult<Outcome> {
        Ok(self)
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> SpecResult<Outcome> {
        Ok(if self { Outcome::Pass } else { Outcome::Fail(None) })
    }
}

/// A returned string is always a failure; an empty one gets the generic message.
impl IntoOutcome for String {
    fn into_outcome(self) -> SpecResult<Outcome> {
        Ok(Outcome::Fail((!self.is_empty()).then_some(self)))
    }
}

impl IntoOutcome for &str {
    fn into_outcome(self) -> SpecResult<Outcome> {
        self.to_owned().into_outcome()
    }
}

impl IntoOutcome for Result<(), String> {
    fn into_outcome(self) -> SpecResult<Outcome> {
        match self {
            Ok(()) => Ok(Outcome::Pass),
            Err(message) => message.into_outcome(),
        }
    }
}

impl IntoOutcome for Result<Outcome, SpecError> {
    fn into_outcome(self) -> SpecResult<Outcome> {
        self
    }
}

/// Final answer of an evaluation: the value is valid, or the first failure
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a verdict must be checked"]
pub enum Verdict {
    /// Every rule accepted every element.
    Valid,
    /// The first failing rule's message.
    Invalid(String),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }

    /// Converts into a plain `Result`, with the failure message as the error.
    pub fn into_result(self) -> Result<(), String> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(message) => Err(message),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid(message) => f.write_str(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_outcomes() {
        assert_eq!(true.into_outcome().unwrap(), Outcome::Pass);
        assert_eq!(false.into_outcome().unwrap(), Outcome::Fail(None));
    }

    #[test]
    fn string_is_a_failure_message() {
        assert_eq!(
            "too short".into_outcome().unwrap(),
            Outcome::fail("too short")
        );
        assert_eq!(String::new().into_outcome().unwrap(), Outcome::Fail(None));
    }

    #[test]
    fn result_outcomes() {
        let ok: Result<(), String> = Ok(());
        assert!(ok.into_outcome().unwrap().is_pass());

        let err: Result<(), String> = Err("nope".into());
        assert_eq!(err.into_outcome().unwrap(), Outcome::fail("nope"));

        let fatal: SpecResult<Outcome> = Err(SpecError::MissingValue);
        assert!(fatal.into_outcome().is_err());
    }

    #[test]
    fn check_builds_message_only_on_failure() {
        assert_eq!(Outcome::check(true, || unreachable!()), Outcome::Pass);
        assert_eq!(
            Outcome::check(false, || "bad".to_string()),
            Outcome::fail("bad")
        );
    }

    #[test]
    fn verdict_accessors() {
        assert!(Verdict::Valid.is_valid());
        assert_eq!(Verdict::Valid.message(), None);
        assert_eq!(Verdict::Valid.into_result(), Ok(()));

        let invalid = Verdict::Invalid("bad".into());
        assert!(!invalid.is_valid());
        assert_eq!(invalid.message(), Some("bad"));
        assert_eq!(invalid.to_string(), "bad");
        assert_eq!(invalid.into_result(), Err("bad".to_string()));
    }
}
