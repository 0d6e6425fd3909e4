//! Static tag → parser table.
//!
//! Tags are grouped by family (the prefix before the first `.`). Lookup picks the family table
//! first, then the tag within it.

use crate::error::ExamParseError;
use crate::exams::{Exam, ExamSpec, env, file};
use medik_types::ExamDescriptor;
use medik_types::ids::{FAMILY_ENV, FAMILY_FILE, split_tag};

pub type ExamParser = fn(&ExamDescriptor) -> Result<Exam, ExamParseError>;

struct Registration {
    tag: &'static str,
    parse: ExamParser,
}

fn parse_as<T>(descriptor: &ExamDescriptor) -> Result<Exam, ExamParseError>
where
    T: ExamSpec + Into<Exam>,
{
    T::parse(descriptor).map(Into::into)
}

macro_rules! registrations {
    ($($ty:ty),+ $(,)?) => {
        &[$(Registration {
            tag: <$ty as ExamSpec>::TAG,
            parse: parse_as::<$ty>,
        }),+]
    };
}

const ENV_EXAMS: &[Registration] = registrations![
    env::IsSet,
    env::NotEmpty,
    env::Regex,
    env::Options,
    env::Int,
    env::IntRange,
    env::Float,
    env::FloatRange,
    env::File,
    env::Dir,
    env::Ipv4,
    env::Ipv6,
    env::Ip,
    env::Hostname,
];

const FILE_EXAMS: &[Registration] = registrations![
    file::Path,
    file::IsFile,
    file::IsDir,
    file::IsEmpty,
    file::IsNotEmpty,
];

fn family(name: &str) -> Option<&'static [Registration]> {
    match name {
        FAMILY_ENV => Some(ENV_EXAMS),
        FAMILY_FILE => Some(FILE_EXAMS),
        _ => None,
    }
}

/// Parser for `tag`, or `None` when the family or the tag is unknown.
pub fn lookup(tag: &str) -> Option<ExamParser> {
    let (prefix, _) = split_tag(tag)?;
    family(prefix)?
        .iter()
        .find(|r| r.tag == tag)
        .map(|r| r.parse)
}

/// Every registered tag, env family first, in registration order.
pub fn registered_tags() -> impl Iterator<Item = &'static str> {
    ENV_EXAMS.iter().chain(FILE_EXAMS).map(|r| r.tag)
}

/// Look up the descriptor's tag and parse it into a typed exam.
pub fn parse_exam(descriptor: &ExamDescriptor) -> Result<Exam, ExamParseError> {
    let parse = lookup(&descriptor.kind).ok_or_else(|| ExamParseError::UnknownExam {
        exam: descriptor.kind.clone(),
    })?;
    parse(descriptor)
}
