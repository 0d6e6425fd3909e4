//! Numeric exams: `env.int`, `env.float` and their inclusive range variants.

use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::{AllOf, ValueCheck, examinate_vars};
use crate::exams::{Common, ExamSpec, require_float, require_int};
use medik_types::ids::{EXAM_ENV_FLOAT, EXAM_ENV_FLOAT_RANGE, EXAM_ENV_INT, EXAM_ENV_INT_RANGE};
use medik_types::{ExamDescriptor, ExamReport};

const NOT_AN_INT: &str = "value should be an integer";
const NOT_A_FLOAT: &str = "value should be a float";

fn is_int(value: &str) -> Result<(), String> {
    value
        .parse::<i64>()
        .map(drop)
        .map_err(|_| NOT_AN_INT.to_string())
}

fn is_float(value: &str) -> Result<(), String> {
    value
        .parse::<f64>()
        .map(drop)
        .map_err(|_| NOT_A_FLOAT.to_string())
}

fn out_of_range(min: impl std::fmt::Display, max: impl std::fmt::Display) -> String {
    format!("value should be in the range [{min}, {max}]")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Int {
    common: Common,
}

impl ExamSpec for Int {
    const TAG: &'static str = EXAM_ENV_INT;

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
            &is_int,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Float {
    common: Common,
}

impl ExamSpec for Float {
    const TAG: &'static str = EXAM_ENV_FLOAT;

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
            &is_float,
        )
    }
}

/// Integer within `[min, max]`, both ends included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntRange {
    common: Common,
    min: i64,
    max: i64,
}

impl ExamSpec for IntRange {
    const TAG: &'static str = EXAM_ENV_INT_RANGE;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        let common = Common::parse(descriptor, Self::TAG)?;
        let min = require_int(Self::TAG, "min", descriptor.min)?;
        let max = require_int(Self::TAG, "max", descriptor.max)?;
        Ok(Self { common, min, max })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        let in_range = |value: &str| -> Result<(), String> {
            let n: i64 = value.parse().map_err(|_| NOT_AN_INT.to_string())?;
            if (self.min..=self.max).contains(&n) {
                Ok(())
            } else {
                Err(out_of_range(self.min, self.max))
            }
        };
        let check = AllOf(vec![&is_int as &dyn ValueCheck, &in_range]);
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &check,
        )
    }
}

/// Float within `[min, max]`, both ends included. NaN is never in range.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatRange {
    common: Common,
    min: f64,
    max: f64,
}

impl ExamSpec for FloatRange {
    const TAG: &'static str = EXAM_ENV_FLOAT_RANGE;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        let common = Common::parse(descriptor, Self::TAG)?;
        let min = require_float(Self::TAG, "min", descriptor.min)?;
        let max = require_float(Self::TAG, "max", descriptor.max)?;
        Ok(Self { common, min, max })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        let in_range = |value: &str| -> Result<(), String> {
            let n: f64 = value.parse().map_err(|_| NOT_A_FLOAT.to_string())?;
            if (self.min..=self.max).contains(&n) {
                Ok(())
            } else {
                Err(out_of_range(self.min, self.max))
            }
        };
        let check = AllOf(vec![&is_float as &dyn ValueCheck, &in_range]);
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &check,
        )
    }
}
