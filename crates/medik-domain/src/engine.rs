use crate::environment::Environment;
use crate::error::RunError;
use crate::exams::Exam;
use crate::registry::parse_exam;
use medik_types::{ExamDescriptor, ExamReport, Severity};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Which exam list an exam was declared in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExamOrigin {
    Base,
    Protocol(String),
}

impl fmt::Display for ExamOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamOrigin::Base => f.write_str("exams"),
            ExamOrigin::Protocol(name) => write!(f, "protocol '{name}'"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    /// Worst report severity; `Ok` when there are no reports.
    pub severity: Severity,
    /// Base reports first, then each activated protocol in name order.
    pub reports: Vec<ExamReport>,
}

/// Parse the base exams and every activated protocol, without evaluating anything.
///
/// A protocol is activated when it is both requested and declared. Activated protocols run in
/// name order, once each, however they were requested.
pub fn plan(
    exams: &[ExamDescriptor],
    protocol_names: &[String],
    protocols: &BTreeMap<String, Vec<ExamDescriptor>>,
) -> Result<Vec<Exam>, RunError> {
    for name in protocol_names {
        if !protocols.contains_key(name) {
            warn!(protocol = %name, "requested protocol is not declared; skipping");
        }
    }

    let mut planned = parse_list(ExamOrigin::Base, exams)?;

    for (name, list) in protocols {
        if protocol_names.iter().any(|n| n == name) {
            debug!(protocol = %name, exams = list.len(), "protocol activated");
            planned.extend(parse_list(ExamOrigin::Protocol(name.clone()), list)?);
        } else {
            debug!(protocol = %name, "protocol not requested; skipping");
        }
    }

    Ok(planned)
}

fn parse_list(origin: ExamOrigin, list: &[ExamDescriptor]) -> Result<Vec<Exam>, RunError> {
    list.iter()
        .enumerate()
        .map(|(i, descriptor)| {
            let exam = parse_exam(descriptor).map_err(|source| RunError {
                origin: origin.clone(),
                position: i + 1,
                source,
            })?;
            debug!(exam = exam.tag(), %origin, "exam parsed");
            Ok(exam)
        })
        .collect()
}

/// Parse everything, then evaluate every planned exam in order and fold the reports.
///
/// A parse error aborts the run before any exam is evaluated. Failing targets are report data,
/// never errors.
pub fn run(
    exams: &[ExamDescriptor],
    protocol_names: &[String],
    protocols: &BTreeMap<String, Vec<ExamDescriptor>>,
    env: &dyn Environment,
) -> Result<RunResult, RunError> {
    let planned = plan(exams, protocol_names, protocols)?;

    let reports: Vec<ExamReport> = planned.iter().map(|exam| exam.examinate(env)).collect();
    let severity = Severity::worst(reports.iter().map(ExamReport::severity));

    debug!(reports = reports.len(), %severity, "run finished");
    Ok(RunResult { severity, reports })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExamParseError;
    use crate::test_support::{descriptor, env_of};

    fn protocol_map(
        entries: Vec<(&str, Vec<ExamDescriptor>)>,
    ) -> BTreeMap<String, Vec<ExamDescriptor>> {
        entries
            .into_iter()
            .map(|(name, list)| (name.to_string(), list))
            .collect()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_run_is_healthy() {
        let result = run(&[], &[], &BTreeMap::new(), &env_of(&[])).expect("run");
        assert_eq!(result.severity, Severity::Ok);
        assert!(result.reports.is_empty());
    }

    #[test]
    fn unrequested_protocol_is_excluded() {
        let env = env_of(&[("A", "1")]);
        let exams = vec![
            descriptor("env.is-set", &["A"]),
            descriptor("env.is-set", &["B"]).with_level("warning"),
        ];
        let protocols = protocol_map(vec![(
            "p",
            vec![descriptor("env.is-set", &["C"]).with_level("error")],
        )]);

        let result = run(&exams, &[], &protocols, &env).expect("run");
        assert_eq!(result.severity, Severity::Warning);
        assert_eq!(result.reports.len(), 2);

        let result = run(&exams, &names(&["p"]), &protocols, &env).expect("run");
        assert_eq!(result.severity, Severity::Error);
        assert_eq!(result.reports.len(), 3);
    }

    #[test]
    fn protocols_run_in_name_order_once() {
        let env = env_of(&[]);
        let protocols = protocol_map(vec![
            ("b", vec![descriptor("env.int", &["B"])]),
            ("a", vec![descriptor("env.float", &["A"])]),
        ]);

        let result = run(&[], &names(&["b", "a", "b"]), &protocols, &env).expect("run");
        let tags: Vec<&str> = result.reports.iter().map(|r| r.exam.as_str()).collect();
        assert_eq!(tags, vec!["env.float", "env.int"]);
    }

    #[test]
    fn unknown_requested_protocol_is_ignored() {
        let result = run(
            &[descriptor("env.is-set", &["A"])],
            &names(&["ghost"]),
            &BTreeMap::new(),
            &env_of(&[("A", "x")]),
        )
        .expect("run");
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.severity, Severity::Ok);
    }

    #[test]
    fn parse_error_in_protocol_aborts_the_run() {
        let protocols = protocol_map(vec![(
            "db",
            vec![
                descriptor("env.is-set", &["A"]),
                descriptor("env.int-range", &["POOL"]),
            ],
        )]);

        let err = run(
            &[descriptor("env.is-set", &["A"])],
            &names(&["db"]),
            &protocols,
            &env_of(&[]),
        )
        .unwrap_err();

        assert_eq!(err.origin, ExamOrigin::Protocol("db".to_string()));
        assert_eq!(err.position, 2);
        assert!(matches!(
            err.source,
            ExamParseError::MissingField { field: "min", .. }
        ));
    }

    #[test]
    fn unknown_exam_in_base_list_is_fatal() {
        let err = plan(&[descriptor("env.nope", &["A"])], &[], &BTreeMap::new()).unwrap_err();
        assert_eq!(err.origin, ExamOrigin::Base);
        assert_eq!(err.position, 1);
        assert_eq!(
            err.to_string(),
            "exam #1 in exams: unknown exam type 'env.nope'"
        );
    }

    #[test]
    fn broken_unrequested_protocol_is_never_parsed() {
        let protocols = protocol_map(vec![("p", vec![descriptor("env.nope", &["A"])])]);
        let result = run(&[], &[], &protocols, &env_of(&[])).expect("run");
        assert!(result.reports.is_empty());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let env = env_of(&[("PORT", "8080"), ("MODE", "dev")]);
        let exams = vec![
            descriptor("env.int", &["PORT", "MISSING"]),
            descriptor("env.not-empty", &["MODE"]).with_level("warning"),
        ];

        let first = run(&exams, &[], &BTreeMap::new(), &env).expect("run");
        let second = run(&exams, &[], &BTreeMap::new(), &env).expect("run");
        assert_eq!(first, second);
        assert_eq!(first.severity, Severity::Error);
    }
}
