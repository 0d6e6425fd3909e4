use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::{Common, ExamSpec};
use medik_types::ids::EXAM_FILE_PATH;
use medik_types::{ExamDescriptor, ExamReport, TargetDomain, TargetStatus};

/// Path existence must match `exists`.
///
/// Unlike the other path exams, a missing path is never reported as missing: existence is the
/// thing under test, so a mismatch is invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    common: Common,
    exists: bool,
}

impl ExamSpec for Path {
    const TAG: &'static str = EXAM_FILE_PATH;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        Ok(Self {
            common: Common::parse(descriptor, Self::TAG)?,
            exists: descriptor.exists_or_default(),
        })
    }

    fn examinate(&self, _env: &dyn Environment) -> ExamReport {
        let mut report = ExamReport::new(Self::TAG, TargetDomain::Path, self.common.level);
        for target in &self.common.targets {
            let status = match std::path::Path::new(target).try_exists() {
                Ok(found) if found == self.exists => TargetStatus::valid(target),
                Ok(_) if self.exists => TargetStatus::invalid(target, "path should exist"),
                Ok(_) => TargetStatus::invalid(target, "path should not exist"),
                Err(err) => TargetStatus::invalid(target, err.to_string()),
            };
            report.push(status);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_parse_guards, descriptor, env_of};
    use medik_types::Severity;

    #[test]
    fn parse_guards() {
        assert_parse_guards::<Path>(descriptor(EXAM_FILE_PATH, &["/tmp"]));
    }

    #[test]
    fn existence_must_match() {
        let dir = tempfile::tempdir().expect("tempdir");
        let present = dir.path().to_string_lossy().into_owned();
        let absent = dir.path().join("gone").to_string_lossy().into_owned();
        let env = env_of(&[]);

        let targets = [present.as_str(), absent.as_str()];

        let must_exist = Path::parse(&descriptor(EXAM_FILE_PATH, &targets)).expect("parse");
        let report = must_exist.examinate(&env);
        assert_eq!(
            report.statuses,
            vec![
                TargetStatus::valid(present.clone()),
                TargetStatus::invalid(absent.clone(), "path should exist"),
            ]
        );
        assert_eq!(report.severity(), Severity::Error);

        let mut d = descriptor(EXAM_FILE_PATH, &targets);
        d.exists = Some(false);
        let must_not_exist = Path::parse(&d).expect("parse");
        assert_eq!(
            must_not_exist.examinate(&env).statuses,
            vec![
                TargetStatus::invalid(present, "path should not exist"),
                TargetStatus::valid(absent),
            ]
        );
    }
}
