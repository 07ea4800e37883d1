//! Configuration error types.
//!
//! Everything in here signals misuse of the engine: a bad spec, a bad
//! parameter, or a value of the wrong shape. Ordinary validation failures are
//! never errors; they come back as [`Verdict::Invalid`](crate::Verdict::Invalid).

use thiserror::Error;

/// Result alias for operations that can raise a [`SpecError`].
pub type SpecResult<T> = Result<T, SpecError>;

/// Fatal configuration or programmer error raised by the engine.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum SpecError {
    /// A spec names a rule that is neither a core rule nor in the supplied
    /// auxiliary registry.
    #[error(
        "No such validation '{rule}' found in core validators{}.",
        auxiliary_suffix(.with_auxiliary)
    )]
    UnknownRule {
        /// The unresolved rule name.
        rule: String,
        /// Whether an auxiliary registry was consulted.
        with_auxiliary: bool,
    },

    /// Evaluation was requested without a spec.
    #[error("Validation 'spec' is not defined.")]
    MissingSpec,

    /// Evaluation was requested without a value.
    #[error("Validation 'value' is not defined.")]
    MissingValue,

    /// The value (or one of its elements) is not a string.
    #[error("Validation 'value' must be a string or an array of strings; got: '{found}'.")]
    NotAString {
        /// Every element of the value, rendered and joined.
        found: String,
    },

    /// `match-re` was given pattern source that does not compile.
    #[error("'match-re' RE '{pattern}' is not a valid regular expression.")]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// Compiler diagnostic.
        #[source]
        source: regex::Error,
    },

    /// A core rule received a parameter of the wrong shape.
    #[error("'{rule}' expects {expected}; got {found}.")]
    InvalidArgument {
        /// Rule name.
        rule: String,
        /// What the rule accepts.
        expected: &'static str,
        /// What it was given.
        found: String,
    },

    /// A spec document is not a mapping of rule names to parameters.
    #[error("Validation 'spec' must be an object mapping rule names to parameters; got {found}.")]
    InvalidSpec {
        /// The rejected document.
        found: String,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn auxiliary_suffix(with_auxiliary: &bool) -> &'static str {
    if *with_auxiliary {
        " or supplied validators"
    } else {
        ""
    }
}

impl SpecError {
    /// Create an unknown-rule error.
    pub fn unknown_rule(rule: impl Into<String>, with_auxiliary: bool) -> Self {
        Self::UnknownRule {
            rule: rule.into(),
            with_auxiliary,
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(
        rule: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            rule: rule.into(),
            expected,
            found: found.into(),
        }
    }

    /// Returns `true` if this error was caused by an unresolvable rule name.
    pub fn is_unknown_rule(&self) -> bool {
        matches!(self, Self::UnknownRule { .. })
    }
}
