//! Per-target evaluation shared by the exam kinds.

use crate::environment::Environment;
use medik_types::{ExamReport, Severity, TargetDomain, TargetStatus};
use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::Path;

/// A validation applied to a variable value. `Err` carries the reason shown to the user.
pub trait ValueCheck {
    fn check(&self, value: &str) -> Result<(), String>;
}

impl<F> ValueCheck for F
where
    F: Fn(&str) -> Result<(), String>,
{
    fn check(&self, value: &str) -> Result<(), String> {
        self(value)
    }
}

/// Passes only if every check passes. Stops at the first failure.
pub struct AllOf<'a>(pub Vec<&'a dyn ValueCheck>);

impl ValueCheck for AllOf<'_> {
    fn check(&self, value: &str) -> Result<(), String> {
        self.0.iter().try_for_each(|c| c.check(value))
    }
}

/// Passes as soon as one check passes.
pub struct AnyOf<'a>(pub Vec<&'a dyn ValueCheck>);

impl ValueCheck for AnyOf<'_> {
    fn check(&self, value: &str) -> Result<(), String> {
        let mut reasons = Vec::with_capacity(self.0.len());
        for c in &self.0 {
            match c.check(value) {
                Ok(()) => return Ok(()),
                Err(reason) => reasons.push(reason),
            }
        }
        Err(format!(
            "none of the accepted forms matched: {}",
            reasons.join("; ")
        ))
    }
}

/// Evaluate every variable in `vars`: unset is missing, otherwise `check` decides.
pub fn examinate_vars(
    tag: &str,
    level: Severity,
    vars: &[String],
    env: &dyn Environment,
    check: &dyn ValueCheck,
) -> ExamReport {
    let mut report = ExamReport::new(tag, TargetDomain::EnvVar, level);
    for name in vars {
        let status = match env.var(name) {
            None => TargetStatus::missing(name),
            Some(value) => match check.check(&value) {
                Ok(()) => TargetStatus::valid(name),
                Err(reason) => TargetStatus::invalid_value(name, value, reason),
            },
        };
        report.push(status);
    }
    report
}

/// Evaluate every path in `paths`: absent is missing, otherwise `check` inspects its metadata.
///
/// Metadata follows symlinks. Errors other than "not found" (permissions, broken links in the
/// middle of the path) are reported as invalid with the OS message.
pub fn examinate_paths<F>(tag: &str, level: Severity, paths: &[String], check: F) -> ExamReport
where
    F: Fn(&Path, &Metadata) -> Result<(), String>,
{
    let mut report = ExamReport::new(tag, TargetDomain::Path, level);
    for target in paths {
        let path = Path::new(target);
        let status = match std::fs::metadata(path) {
            Err(err) if err.kind() == ErrorKind::NotFound => TargetStatus::missing(target),
            Err(err) => TargetStatus::invalid(target, err.to_string()),
            Ok(meta) => match check(path, &meta) {
                Ok(()) => TargetStatus::valid(target),
                Err(reason) => TargetStatus::invalid(target, reason),
            },
        };
        report.push(status);
    }
    report
}
