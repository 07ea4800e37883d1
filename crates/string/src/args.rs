//! Rule parameters and their normalization.
//!
//! A spec author can hand a rule its parameters in several shapes: nothing at
//! all, a bare scalar, a positional list, or a descriptor object whose `args`
//! field carries the real parameters. [`Param`] is the authored shape;
//! [`Args`] is what a rule implementation receives. The conversion happens
//! once, when a rule is added to a [`Spec`](crate::Spec).

use std::slice;

use regex::Regex;
use serde_json::{Map, Value};

/// Descriptor key marking an object as pass-through.
const TEST_KEY: &str = "test";
/// Descriptor key holding the actual parameters.
const ARGS_KEY: &str = "args";

// ============================================================================
// PARAM
// ============================================================================

/// Rule parameters as written by the spec author.
#[derive(Debug, Clone)]
pub enum Param {
    /// No parameters.
    Absent,
    /// A single string, number, or boolean.
    Scalar(Value),
    /// Positional parameters.
    Sequence(Vec<Value>),
    /// A structured object, possibly an `args`/`test` descriptor.
    Object(Map<String, Value>),
    /// A pre-compiled pattern, for `match-re`.
    Pattern(Regex),
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Array(items) => Self::Sequence(items),
            Value::Object(map) => Self::Object(map),
            scalar => Self::Scalar(scalar),
        }
    }
}

impl From<Regex> for Param {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Option<Value>> for Param {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Self::Absent, Self::from)
    }
}

macro_rules! scalar_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Value::from(value))
                }
            }
        )*
    };
}

scalar_param!(&str, String, bool, i32, i64, u32, u64, usize);

impl<T: Into<Value>> From<Vec<T>> for Param {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// ARG
// ============================================================================

/// One normalized argument handed to a rule implementation.
#[derive(Debug, Clone)]
pub enum Arg {
    /// A JSON value.
    Value(Value),
    /// A pre-compiled pattern.
    Pattern(Regex),
}

impl Arg {
    /// The argument as a string slice, if it is a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(value) => value.as_str(),
            Self::Pattern(_) => None,
        }
    }

    /// The argument as a count, if it is an integer. Negative counts are kept.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            Self::Value(value) => value.as_i64(),
            Self::Pattern(_) => None,
        }
    }

    /// The underlying JSON value, if this is not a pattern.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Pattern(_) => None,
        }
    }

    /// Short rendering used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Value(value) => value.to_string(),
            Self::Pattern(pattern) => format!("/{pattern}/"),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Pattern(pattern) => Value::String(pattern.as_str().to_owned()),
        }
    }
}

// ============================================================================
// ARGS
// ============================================================================

/// Normalized rule arguments.
#[derive(Debug, Clone, Default)]
pub enum Args {
    /// The rule takes no parameters.
    #[default]
    None,
    /// A single argument.
    One(Arg),
    /// Positional arguments, spread into the rule call.
    Positional(Vec<Arg>),
}

impl Args {
    /// Normalizes authored parameters.
    ///
    /// - absent, positional, and `test`-marked objects pass through unchanged;
    /// - an object with an `args` field is replaced by that field;
    /// - anything else is a single argument.
    pub fn normalize(param: &Param) -> Self {
        match param {
            Param::Absent => Self::None,
            Param::Sequence(items) => Self::positional(items.iter().cloned()),
            Param::Scalar(value) => Self::One(Arg::Value(value.clone())),
            Param::Pattern(pattern) => Self::One(Arg::Pattern(pattern.clone())),
            Param::Object(map) if map.contains_key(TEST_KEY) => {
                Self::One(Arg::Value(Value::Object(map.clone())))
            }
            Param::Object(map) => match map.get(ARGS_KEY) {
                Some(Value::Array(items)) => Self::positional(items.iter().cloned()),
                Some(Value::Null) => Self::None,
                Some(args) => Self::One(Arg::Value(args.clone())),
                None => Self::One(Arg::Value(Value::Object(map.clone()))),
            },
        }
    }

    fn positional(items: impl Iterator<Item = Value>) -> Self {
        Self::Positional(items.map(Arg::Value).collect())
    }

    /// The arguments as a positional slice.
    pub fn as_slice(&self) -> &[Arg] {
        match self {
            Self::None => &[],
            Self::One(arg) => slice::from_ref(arg),
            Self::Positional(args) => args,
        }
    }

    /// The arguments folded into a single argument: positional arguments
    /// become one JSON array.
    pub fn collapsed(&self) -> Self {
        match self {
            Self::Positional(args) => Self::One(Arg::Value(Value::Array(
                args.iter().cloned().map(Arg::into_value).collect(),
            ))),
            other => other.clone(),
        }
    }

    /// Returns `true` if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn values(args: &Args) -> Vec<Value> {
        args.as_slice()
            .iter()
            .map(|arg| arg.as_value().cloned().unwrap_or(Value::Null))
            .collect()
    }

    #[test]
    fn absent_stays_empty() {
        let args = Args::normalize(&Param::from(Value::Null));
        assert!(matches!(args, Args::None));
        assert!(args.is_empty());
    }

    #[test]
    fn sequence_is_positional() {
        let args = Args::normalize(&Param::from(json!(["foo", "bar"])));
        assert!(matches!(args, Args::Positional(_)));
        assert_eq!(values(&args), vec![json!("foo"), json!("bar")]);
    }

    #[test]
    fn scalar_is_single() {
        let args = Args::normalize(&Param::from(3));
        assert_eq!(values(&args), vec![json!(3)]);
        assert_eq!(args.as_slice()[0].as_count(), Some(3));
    }

    #[test]
    fn descriptor_args_are_unwrapped() {
        let args = Args::normalize(&Param::from(json!({ "args": ["a", "b"] })));
        assert!(matches!(args, Args::Positional(_)));
        assert_eq!(values(&args), vec![json!("a"), json!("b")]);

        let args = Args::normalize(&Param::from(json!({ "args": 5 })));
        assert_eq!(values(&args), vec![json!(5)]);

        let args = Args::normalize(&Param::from(json!({ "args": null })));
        assert!(args.is_empty());
    }

    #[test]
    fn test_marker_passes_object_through() {
        let raw = json!({ "test": true, "args": [1, 2] });
        let args = Args::normalize(&Param::from(raw.clone()));
        assert_eq!(values(&args), vec![raw]);
    }

    #[test]
    fn plain_object_is_single() {
        let raw = json!({ "allow_display_name": true });
        let args = Args::normalize(&Param::from(raw.clone()));
        assert_eq!(values(&args), vec![raw]);
    }

    #[test]
    fn pattern_is_single() {
        let args = Args::normalize(&Param::from(Regex::new("foo$").unwrap()));
        assert!(matches!(args.as_slice(), [Arg::Pattern(_)]));
        assert_eq!(args.as_slice()[0].describe(), "/foo$/");
    }

    #[test]
    fn collapsed_folds_positional_into_array() {
        let args = Args::normalize(&Param::from(vec!["hi", "bye"])).collapsed();
        assert_eq!(values(&args), vec![json!(["hi", "bye"])]);

        let single = Args::normalize(&Param::from("one, two")).collapsed();
        assert_eq!(values(&single), vec![json!("one, two")]);
    }

    #[test]
    fn arg_accessors() {
        let arg = Arg::Value(json!("x"));
        assert_eq!(arg.as_str(), Some("x"));
        assert_eq!(arg.as_count(), None);
        assert_eq!(Arg::Value(json!(-1)).as_count(), Some(-1));
        assert_eq!(Arg::Value(json!(2.5)).as_count(), None);
        assert_eq!(arg.describe(), "\"x\"");
    }
}
