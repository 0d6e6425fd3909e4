use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::examinate_vars;
use crate::exams::{Common, ExamSpec};
use medik_types::ids::EXAM_ENV_NOT_EMPTY;
use medik_types::{ExamDescriptor, ExamReport};

/// Every variable must be set to something other than whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotEmpty {
    common: Common,
}

impl ExamSpec for NotEmpty {
    const TAG: &'static str = EXAM_ENV_NOT_EMPTY;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        Ok(Self {
            common: Common::parse(descriptor, Self::TAG)?,
        })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &not_blank,
        )
    }
}

fn not_blank(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("value should not be empty".to_string())
    } else {
        Ok(())
    }
}
