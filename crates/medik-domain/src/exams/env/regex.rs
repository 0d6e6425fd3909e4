use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::examinate_vars;
use crate::exams::{Common, ExamSpec};
use medik_types::ids::EXAM_ENV_REGEX;
use medik_types::{ExamDescriptor, ExamReport};

/// Every variable must match a regular expression.
///
/// The pattern is unanchored, so it matches anywhere in the value; use `^...$` to match the
/// whole value.
#[derive(Clone, Debug)]
pub struct Regex {
    common: Common,
    regex: regex::Regex,
}

impl ExamSpec for Regex {
    const TAG: &'static str = EXAM_ENV_REGEX;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        let common = Common::parse(descriptor, Self::TAG)?;
        let pattern = descriptor
            .regex
            .as_deref()
            .ok_or(ExamParseError::MissingField {
                exam: Self::TAG,
                field: "regex",
            })?;
        let regex = regex::Regex::new(pattern).map_err(|source| ExamParseError::InvalidRegex {
            exam: Self::TAG,
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self { common, regex })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        let matches = |value: &str| -> Result<(), String> {
            if self.regex.is_match(value) {
                Ok(())
            } else {
                Err(format!("value should match regex {}", self.regex.as_str()))
            }
        };
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &matches,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_parse_guards, descriptor, invalid_reason, outcome_for};
    use medik_types::TargetOutcome;

    fn with_regex(pattern: &str) -> ExamDescriptor {
        ExamDescriptor {
            regex: Some(pattern.to_string()),
            ..descriptor(EXAM_ENV_REGEX, &["V"])
        }
    }

    #[test]
    fn parse_guards() {
        assert_parse_guards::<Regex>(with_regex("^a+$"));
    }

    #[test]
    fn missing_regex_is_a_missing_field() {
        let err = Regex::parse(&descriptor(EXAM_ENV_REGEX, &["V"])).unwrap_err();
        assert!(matches!(
            err,
            ExamParseError::MissingField { field: "regex", .. }
        ));
    }

    #[test]
    fn invalid_regex_wraps_the_compile_error() {
        let err = Regex::parse(&with_regex("foo[0-9")).unwrap_err();
        match &err {
            ExamParseError::InvalidRegex { pattern, .. } => assert_eq!(pattern, "foo[0-9"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn value_must_match() {
        let exam = Regex::parse(&with_regex("^[a-z]+-[0-9]+$")).expect("parse");
        assert_eq!(outcome_for(&exam, "build-42"), TargetOutcome::Valid);
        assert_eq!(
            invalid_reason(&outcome_for(&exam, "build42")),
            "value should match regex ^[a-z]+-[0-9]+$"
        );
    }
}
