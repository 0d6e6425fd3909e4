use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::examinate_vars;
use crate::exams::{Common, ExamSpec};
use medik_types::ids::EXAM_ENV_IS_SET;
use medik_types::{ExamDescriptor, ExamReport};

/// Every variable must be set. An empty value counts as set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsSet {
    common: Common,
}

impl ExamSpec for IsSet {
    const TAG: &'static str = EXAM_ENV_IS_SET;

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
            &accept_any,
        )
    }
}

fn accept_any(_: &str) -> Result<(), String> {
    Ok(())
}
