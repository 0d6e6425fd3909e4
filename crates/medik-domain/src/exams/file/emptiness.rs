use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::examinate_paths;
use crate::exams::{Common, ExamSpec};
use medik_types::ids::{EXAM_FILE_IS_EMPTY, EXAM_FILE_IS_NOT_EMPTY};
use medik_types::{ExamDescriptor, ExamReport};
use std::fs::Metadata;
use std::path::Path;

/// A directory is empty when it has no entries; anything else when its size is zero.
fn is_empty(path: &Path, meta: &Metadata) -> Result<bool, String> {
    if meta.is_dir() {
        let mut entries = std::fs::read_dir(path).map_err(|err| err.to_string())?;
        Ok(entries.next().is_none())
    } else {
        Ok(meta.len() == 0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsEmpty {
    common: Common,
}

impl ExamSpec for IsEmpty {
    const TAG: &'static str = EXAM_FILE_IS_EMPTY;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        Ok(Self {
            common: Common::parse(descriptor, Self::TAG)?,
        })
    }

    fn examinate(&self, _env: &dyn Environment) -> ExamReport {
        examinate_paths(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            |path, meta| match is_empty(path, meta)? {
                true => Ok(()),
                false if meta.is_dir() => Err("directory isn't empty".to_string()),
                false => Err("file isn't empty".to_string()),
            },
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsNotEmpty {
    common: Common,
}

impl ExamSpec for IsNotEmpty {
    const TAG: &'static str = EXAM_FILE_IS_NOT_EMPTY;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        Ok(Self {
            common: Common::parse(descriptor, Self::TAG)?,
        })
    }

    fn examinate(&self, _env: &dyn Environment) -> ExamReport {
        examinate_paths(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            |path, meta| match is_empty(path, meta)? {
                false => Ok(()),
                true if meta.is_dir() => Err("directory is empty".to_string()),
                true => Err("file is empty".to_string()),
            },
        )
    }
}
