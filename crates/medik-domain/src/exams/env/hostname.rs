use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::examinate_vars;
use crate::exams::{Common, ExamSpec};
use medik_types::ids::EXAM_ENV_HOSTNAME;
use medik_types::{ExamDescriptor, ExamReport};
use url::Url;

/// Every variable must hold an absolute URL, optionally with a fixed scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hostname {
    common: Common,
    protocol: Option<String>,
}

impl ExamSpec for Hostname {
    const TAG: &'static str = EXAM_ENV_HOSTNAME;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        let common = Common::parse(descriptor, Self::TAG)?;
        let protocol = match descriptor.protocol.as_deref() {
            Some("") => {
                return Err(ExamParseError::InvalidField {
                    exam: Self::TAG,
                    field: "protocol",
                    value: String::new(),
                    message: "protocol cannot be empty".to_string(),
                });
            }
            other => other.map(str::to_string),
        };

        Ok(Self { common, protocol })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        let check = |value: &str| -> Result<(), String> {
            let url = Url::parse(value).map_err(|err| format!("value should be a valid URL ({err})"))?;
            match &self.protocol {
                Some(protocol) if url.scheme() != protocol => Err(format!(
                    "value should be a valid URL with protocol {protocol}"
                )),
                _ => Ok(()),
            }
        };
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &check,
        )
    }
}
