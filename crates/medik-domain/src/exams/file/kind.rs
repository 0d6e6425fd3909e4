use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::examinate_paths;
use crate::exams::{Common, ExamSpec};
use medik_types::ids::{EXAM_FILE_IS_DIR, EXAM_FILE_IS_FILE};
use medik_types::{ExamDescriptor, ExamReport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsFile {
    common: Common,
}

impl ExamSpec for IsFile {
    const TAG: &'static str = EXAM_FILE_IS_FILE;

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
            |_, meta| {
                if meta.is_file() {
                    Ok(())
                } else {
                    Err("path isn't a regular file".to_string())
                }
            },
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsDir {
    common: Common,
}

impl ExamSpec for IsDir {
    const TAG: &'static str = EXAM_FILE_IS_DIR;

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
            |_, meta| {
                if meta.is_dir() {
                    Ok(())
                } else {
                    Err("path isn't a directory".to_string())
                }
            },
        )
    }
}
