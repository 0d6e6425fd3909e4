//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - parse guards shared by every registered exam kind
//! - report severity folding in the run aggregator
//! - numeric range bounds

use crate::engine::run;
use crate::error::ExamParseError;
use crate::registry::{lookup, registered_tags};
use crate::test_support::env_of;
use medik_types::{ExamDescriptor, NumericBound, Severity, TargetOutcome};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies
// ============================================================================

fn arb_tag() -> impl Strategy<Value = &'static str> {
    let tags: Vec<&'static str> = registered_tags().collect();
    prop::sample::select(tags)
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn arb_var_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Z0-9_]{0,11}").expect("valid regex")
}

/// A descriptor that satisfies every kind-specific requirement of `tag`.
fn complete_descriptor(tag: &str) -> ExamDescriptor {
    let mut d = ExamDescriptor::new(tag).with_targets(["V"]);
    match tag {
        "env.regex" => d.regex = Some(".*".to_string()),
        "env.options" => d.options = vec!["a".to_string()],
        "env.int-range" => {
            d.min = Some(NumericBound::Int(0));
            d.max = Some(NumericBound::Int(1));
        }
        "env.float-range" => {
            d.min = Some(NumericBound::Float(0.0));
            d.max = Some(NumericBound::Float(1.0));
        }
        _ => {}
    }
    d
}

// ============================================================================
// Parse guards
// ============================================================================

proptest! {
    #[test]
    fn wrong_tag_is_always_rejected(tag in arb_tag(), other in arb_tag()) {
        prop_assume!(tag != other);
        let parse = lookup(tag).expect("registered");
        let mut d = complete_descriptor(tag);
        d.kind = other.to_string();

        let is_wrong_parser = matches!(parse(&d), Err(ExamParseError::WrongParser { .. }));
        prop_assert!(is_wrong_parser);
    }

    #[test]
    fn empty_targets_are_always_rejected(tag in arb_tag()) {
        let parse = lookup(tag).expect("registered");
        let mut d = complete_descriptor(tag);
        d.vars.clear();
        d.paths.clear();

        let is_missing_targets = matches!(parse(&d), Err(ExamParseError::MissingTargets { .. }));
        prop_assert!(is_missing_targets);
    }

    #[test]
    fn complete_descriptors_always_parse(tag in arb_tag(), level in arb_severity()) {
        let parse = lookup(tag).expect("registered");
        let d = complete_descriptor(tag).with_level(level.label());
        let exam = parse(&d).expect("complete descriptor parses");
        prop_assert_eq!(exam.tag(), tag);
    }
}

// ============================================================================
// Aggregation
// ============================================================================

proptest! {
    #[test]
    fn run_severity_is_worst_failing_level(
        exams in prop::collection::vec((arb_var_name(), arb_severity(), any::<bool>()), 0..8)
    ) {
        let mut env = BTreeMap::new();
        let mut descriptors = Vec::new();
        let mut expected = Severity::Ok;

        for (i, (name, level, set)) in exams.iter().enumerate() {
            let var = format!("{name}_{i}");
            if *set {
                env.insert(var.clone(), "x".to_string());
            } else {
                expected = expected.max(*level);
            }
            descriptors.push(
                ExamDescriptor::new("env.is-set")
                    .with_targets([var])
                    .with_level(level.label()),
            );
        }

        let result = run(&descriptors, &[], &BTreeMap::new(), &env).expect("run");
        prop_assert_eq!(result.reports.len(), descriptors.len());
        prop_assert_eq!(result.severity, expected);
    }
}

// ============================================================================
// Numeric ranges
// ============================================================================

proptest! {
    #[test]
    fn int_range_is_inclusive(min in -1000i64..1000, span in 0i64..1000, value in -3000i64..3000) {
        let max = min + span;
        let mut d = ExamDescriptor::new("env.int-range").with_targets(["V"]);
        d.min = Some(NumericBound::Int(min));
        d.max = Some(NumericBound::Int(max));
        let exam = lookup("env.int-range").expect("registered")(&d).expect("parse");

        let text = value.to_string();
        let report = exam.examinate(&env_of(&[("V", text.as_str())]));
        let valid = report.statuses[0].outcome == TargetOutcome::Valid;
        prop_assert_eq!(valid, min <= value && value <= max);
    }
}
