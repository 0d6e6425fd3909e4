//! Typed exams.
//!
//! Each exam kind lives in its own module and implements [`ExamSpec`]. [`Exam`] is the closed
//! set of all kinds; the registry builds it from descriptors and the engine evaluates it.

use crate::environment::Environment;
use crate::error::ExamParseError;
use medik_types::{ExamDescriptor, ExamReport, NumericBound, Severity, TargetDomain};

pub mod env;
pub mod evaluate;
pub mod file;

/// One exam kind: how to validate its descriptor and how to evaluate it.
pub trait ExamSpec: Sized {
    /// Type tag this kind answers to, e.g. `env.regex`.
    const TAG: &'static str;

    /// Build a validated exam. Fails if the descriptor is not of this kind or is incomplete.
    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError>;

    /// Evaluate every target against live state.
    fn examinate(&self, env: &dyn Environment) -> ExamReport;
}

macro_rules! exam_kinds {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// A validated exam of any known kind.
        #[derive(Clone, Debug)]
        pub enum Exam {
            $($variant($ty)),+
        }

        impl Exam {
            pub fn tag(&self) -> &'static str {
                match self {
                    $(Exam::$variant(_) => <$ty as ExamSpec>::TAG),+
                }
            }

            pub fn examinate(&self, env: &dyn Environment) -> ExamReport {
                match self {
                    $(Exam::$variant(exam) => exam.examinate(env)),+
                }
            }
        }

        $(
            impl From<$ty> for Exam {
                fn from(exam: $ty) -> Self {
                    Exam::$variant(exam)
                }
            }
        )+
    };
}

exam_kinds! {
    EnvIsSet(env::IsSet),
    EnvNotEmpty(env::NotEmpty),
    EnvRegex(env::Regex),
    EnvOptions(env::Options),
    EnvInt(env::Int),
    EnvIntRange(env::IntRange),
    EnvFloat(env::Float),
    EnvFloatRange(env::FloatRange),
    EnvFile(env::File),
    EnvDir(env::Dir),
    EnvIpv4(env::Ipv4),
    EnvIpv6(env::Ipv6),
    EnvIp(env::Ip),
    EnvHostname(env::Hostname),
    FilePath(file::Path),
    FileIsFile(file::IsFile),
    FileIsDir(file::IsDir),
    FileIsEmpty(file::IsEmpty),
    FileIsNotEmpty(file::IsNotEmpty),
}

/// Fields shared by every exam kind once the descriptor has been accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Common {
    pub targets: Vec<String>,
    pub level: Severity,
}

impl Common {
    /// Check the tag and the target list, and resolve the configured level.
    pub fn parse(descriptor: &ExamDescriptor, tag: &'static str) -> Result<Self, ExamParseError> {
        if descriptor.kind != tag {
            return Err(ExamParseError::WrongParser {
                expected: tag,
                found: descriptor.kind.clone(),
            });
        }

        let domain = TargetDomain::of_tag(tag);
        let targets = descriptor.targets(domain);
        if targets.is_empty() {
            return Err(ExamParseError::MissingTargets {
                exam: tag,
                field: domain.field(),
            });
        }

        let other = match domain {
            TargetDomain::EnvVar => TargetDomain::Path,
            TargetDomain::Path => TargetDomain::EnvVar,
        };
        if !descriptor.targets(other).is_empty() {
            return Err(ExamParseError::ForeignTargets {
                exam: tag,
                field: other.field(),
                expected: domain.field(),
            });
        }

        Ok(Self {
            targets: targets.to_vec(),
            level: Severity::resolve(descriptor.level.as_deref()),
        })
    }
}

pub(crate) fn require_int(
    tag: &'static str,
    field: &'static str,
    bound: Option<NumericBound>,
) -> Result<i64, ExamParseError> {
    match bound {
        Some(NumericBound::Int(v)) => Ok(v),
        Some(other @ NumericBound::Float(_)) => Err(ExamParseError::WrongFieldType {
            exam: tag,
            field,
            expected: "an integer",
            found: other.kind_name(),
            value: other.to_string(),
        }),
        None => Err(ExamParseError::MissingField { exam: tag, field }),
    }
}

pub(crate) fn require_float(
    tag: &'static str,
    field: &'static str,
    bound: Option<NumericBound>,
) -> Result<f64, ExamParseError> {
    match bound {
        Some(NumericBound::Float(v)) => Ok(v),
        Some(other @ NumericBound::Int(_)) => Err(ExamParseError::WrongFieldType {
            exam: tag,
            field,
            expected: "a float",
            found: other.kind_name(),
            value: other.to_string(),
        }),
        None => Err(ExamParseError::MissingField { exam: tag, field }),
    }
}
