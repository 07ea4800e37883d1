//! # specify-string
//!
//! Declarative string validation. A [`Spec`] maps rule names to parameters;
//! evaluating it against a string (or a list of strings) yields
//! [`Verdict::Valid`] or the first failure as a human-readable message.
//!
//! ## Quick Start
//!
//! ```rust
//! use specify_string::{evaluate, Spec, Verdict};
//! use serde_json::json;
//!
//! let spec = Spec::from_json(json!({
//!     "min-length": 3,
//!     "max-length": 20,
//!     "match-re": "^[a-z]+$",
//! }))
//! .unwrap();
//!
//! assert_eq!(evaluate(&spec, &json!("alice"), None).unwrap(), Verdict::Valid);
//! assert_eq!(
//!     evaluate(&spec, &json!("al"), None).unwrap(),
//!     Verdict::Invalid("Value must be at least 3 characters long; found 2 characters.".into()),
//! );
//! ```
//!
//! ## Built-in Rules
//!
//! - **Cardinality** (whole list): `min-count`, `max-count`, `exact-count`
//! - **Length** (per element): `min-length`, `max-length`, `exact-length`
//! - **Membership**: `one-of` (list, or comma-separated string)
//! - **Pattern**: `match-re` (pattern source or compiled [`regex::Regex`])
//! - **Ordering**: `after`, `before`, `between` (byte-wise lexicographic, exclusive)
//!
//! ## Custom Rules
//!
//! Any `Fn(&str, &[Arg]) -> R` where `R: IntoOutcome` is a [`Rule`]; put it in
//! a [`Registry`] and pass the registry alongside the spec.
//!
//! ## Errors
//!
//! A rule rejecting a value is an ordinary [`Verdict::Invalid`]. Misuse of the
//! engine (unknown rule, missing spec or value, non-string input, malformed
//! pattern, badly shaped parameters) is a [`SpecError`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod args;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod spec;
pub mod validator;

pub use args::{Arg, Args, Param};
pub use engine::{Evaluation, evaluate, validate_spec};
pub use error::{SpecError, SpecResult};
pub use outcome::{IntoOutcome, Outcome, Verdict};
pub use registry::Registry;
pub use rules::{Rule, core_rule_names};
pub use spec::{RuleEntry, Spec};
pub use validator::Validator;
