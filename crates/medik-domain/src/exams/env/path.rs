//! `env.file` and `env.dir`: the variable's value names a path on disk.

use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::examinate_vars;
use crate::exams::{Common, ExamSpec};
use medik_types::ids::{EXAM_ENV_DIR, EXAM_ENV_FILE};
use medik_types::{ExamDescriptor, ExamReport};
use std::path::Path;

fn existence_check(
    exists: bool,
    noun: &'static str,
    probe: fn(&Path) -> bool,
) -> impl Fn(&str) -> Result<(), String> {
    move |value: &str| {
        if probe(Path::new(value)) == exists {
            Ok(())
        } else if exists {
            Err(format!("value should point to an existing {noun}"))
        } else {
            Err(format!("value should point to a non existing {noun}"))
        }
    }
}

/// The value must be the path of a regular file (or, with `exists = false`, must not be).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    common: Common,
    exists: bool,
}

impl ExamSpec for File {
    const TAG: &'static str = EXAM_ENV_FILE;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        Ok(Self {
            common: Common::parse(descriptor, Self::TAG)?,
            exists: descriptor.exists_or_default(),
        })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        let check = existence_check(self.exists, "file", Path::is_file);
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &check,
        )
    }
}

/// The value must be the path of a directory (or, with `exists = false`, must not be).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dir {
    common: Common,
    exists: bool,
}

impl ExamSpec for Dir {
    const TAG: &'static str = EXAM_ENV_DIR;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        Ok(Self {
            common: Common::parse(descriptor, Self::TAG)?,
            exists: descriptor.exists_or_default(),
        })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        let check = existence_check(self.exists, "directory", Path::is_dir);
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &check,
        )
    }
}
