//! Prelude module for convenient imports.
//!
//! ```rust
//! use specify_string::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::new(Spec::new().rule("one-of", "red, green")).unwrap();
//! assert_eq!(validator.validate_one(&json!("red")).unwrap(), Verdict::Valid);
//! ```

pub use crate::args::{Arg, Args, Param};
pub use crate::engine::{Evaluation, evaluate, validate_spec};
pub use crate::error::{SpecError, SpecResult};
pub use crate::outcome::{IntoOutcome, Outcome, Verdict};
pub use crate::registry::Registry;
pub use crate::rules::Rule;
pub use crate::spec::Spec;
pub use crate::validator::Validator;
