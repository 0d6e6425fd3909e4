use crate::error::ExamParseError;
use crate::exams::ExamSpec;
use medik_types::{ExamDescriptor, ExamReport, NumericBound, TargetOutcome};
use std::collections::BTreeMap;

pub fn env_of(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn descriptor(kind: &str, targets: &[&str]) -> ExamDescriptor {
    ExamDescriptor::new(kind).with_targets(targets.iter().copied())
}

pub fn ranged(kind: &str, targets: &[&str], min: NumericBound, max: NumericBound) -> ExamDescriptor {
    ExamDescriptor {
        min: Some(min),
        max: Some(max),
        ..descriptor(kind, targets)
    }
}

/// Outcome of evaluating a single variable `V` set to `value`.
pub fn outcome_for<T: ExamSpec>(exam: &T, value: &str) -> TargetOutcome {
    let report = exam.examinate(&env_of(&[("V", value)]));
    single(report)
}

pub fn single(report: ExamReport) -> TargetOutcome {
    assert_eq!(report.statuses.len(), 1, "expected exactly one status");
    report
        .statuses
        .into_iter()
        .next()
        .map(|s| s.outcome)
        .expect("one status")
}

pub fn invalid_reason(outcome: &TargetOutcome) -> &str {
    match outcome {
        TargetOutcome::Invalid { reason, .. } => reason,
        other => panic!("expected invalid outcome, got {other:?}"),
    }
}

/// Every kind must refuse a descriptor of another kind and an empty target list.
pub fn assert_parse_guards<T: ExamSpec + std::fmt::Debug>(valid: ExamDescriptor) {
    let mut wrong = valid.clone();
    wrong.kind = "invalid".to_string();
    match T::parse(&wrong) {
        Err(ExamParseError::WrongParser { expected, found }) => {
            assert_eq!(expected, T::TAG);
            assert_eq!(found, "invalid");
        }
        other => panic!("expected wrong parser error, got {other:?}"),
    }

    let mut empty = valid.clone();
    empty.vars.clear();
    empty.paths.clear();
    assert!(matches!(
        T::parse(&empty),
        Err(ExamParseError::MissingTargets { .. })
    ));

    T::parse(&valid).expect("valid descriptor should parse");
}
