//! Property-based tests for specify-string.

use proptest::prelude::*;
use serde_json::json;
use specify_string::prelude::*;

fn length_spec(min: usize, max: usize) -> Spec {
    Spec::new().rule("min-length", min).rule("max-length", max)
}

// ============================================================================
// TOTALITY: string input always yields a verdict, never an error
// ============================================================================

proptest! {
    #[test]
    fn string_input_always_yields_a_verdict(s in ".*", min in 0usize..10, max in 0usize..10) {
        let result = evaluate(&length_spec(min, max), &json!(s), None);
        prop_assert!(result.is_ok());
    }

    #[test]
    fn list_input_always_yields_a_verdict(items in prop::collection::vec(".{0,8}", 0..6)) {
        let spec = Spec::new()
            .rule("max-count", 3usize)
            .rule("one-of", "a, b, c")
            .rule("match-re", "^[a-z]*$");
        prop_assert!(evaluate(&spec, &json!(items), None).is_ok());
    }
}

// ============================================================================
// IDEMPOTENCY: evaluate(x) == evaluate(x)
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_idempotent(s in ".{0,30}") {
        let validator = Validator::new(length_spec(3, 10)).unwrap();
        let first = validator.validate_one(&json!(s)).unwrap();
        let second = validator.validate_one(&json!(s)).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// LENGTH RULES AGREE WITH CHARACTER COUNT
// ============================================================================

proptest! {
    #[test]
    fn min_length_matches_char_count(s in ".{0,20}", min in 0usize..20) {
        let verdict = evaluate(&Spec::new().rule("min-length", min), &json!(s), None).unwrap();
        prop_assert_eq!(verdict.is_valid(), s.chars().count() >= min);
    }

    #[test]
    fn exact_count_matches_list_length(items in prop::collection::vec("[a-z]{1,4}", 0..8), n in 0usize..8) {
        let verdict = evaluate(&Spec::new().rule("exact-count", n), &json!(items), None).unwrap();
        prop_assert_eq!(verdict.is_valid(), items.len() == n);
    }
}

// ============================================================================
// ORDER SENSITIVITY: the first declared failing rule reports
// ============================================================================

proptest! {
    #[test]
    fn first_declared_failure_reports(s in "[a-z]{2,5}") {
        // Both rules fail for every input of length 2..=5.
        let too_long = Spec::new().rule("max-length", 1usize).rule("min-length", 6usize);
        let too_short = Spec::new().rule("min-length", 6usize).rule("max-length", 1usize);

        let first = evaluate(&too_long, &json!(s), None).unwrap();
        let second = evaluate(&too_short, &json!(s), None).unwrap();

        prop_assert!(first.message().unwrap().contains("at most 1"));
        prop_assert!(second.message().unwrap().contains("at least 6"));
    }
}

// ============================================================================
// BETWEEN == AFTER AND BEFORE
// ============================================================================

proptest! {
    #[test]
    fn between_is_after_and_before(s in "[a-e]{0,3}") {
        let between = evaluate(&Spec::new().rule("between", vec!["b", "d"]), &json!(s), None).unwrap();
        let split = evaluate(&Spec::new().rule("after", "b").rule("before", "d"), &json!(s), None).unwrap();
        prop_assert_eq!(between.is_valid(), split.is_valid());
    }
}
