use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::examinate_vars;
use crate::exams::{Common, ExamSpec};
use medik_types::ids::EXAM_ENV_OPTIONS;
use medik_types::{ExamDescriptor, ExamReport};
use std::collections::BTreeSet;

/// Every variable must hold one of a fixed set of values (exact, case-sensitive).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    common: Common,
    options: BTreeSet<String>,
}

impl ExamSpec for Options {
    const TAG: &'static str = EXAM_ENV_OPTIONS;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        let common = Common::parse(descriptor, Self::TAG)?;
        if descriptor.options.is_empty() {
            return Err(ExamParseError::MissingField {
                exam: Self::TAG,
                field: "options",
            });
        }

        Ok(Self {
            common,
            options: descriptor.options.iter().cloned().collect(),
        })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        let member = |value: &str| -> Result<(), String> {
            if self.options.contains(value) {
                Ok(())
            } else {
                let allowed: Vec<&str> = self.options.iter().map(String::as_str).collect();
                Err(format!("value should be one of [{}]", allowed.join(", ")))
            }
        };
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &member,
        )
    }
}
