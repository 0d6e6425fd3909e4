//! Catalogue of known exam kinds.
//!
//! Maps exam tags to their target domain and a one-line summary. The domain registry is checked
//! against this list in tests, so the two cannot drift apart.

use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What an exam's targets name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TargetDomain {
    EnvVar,
    Path,
}

impl TargetDomain {
    /// Domain of a tag, from its family prefix. Anything outside `file.*` reads variables.
    pub fn of_tag(tag: &str) -> TargetDomain {
        match ids::split_tag(tag) {
            Some((ids::FAMILY_FILE, _)) => TargetDomain::Path,
            _ => TargetDomain::EnvVar,
        }
    }

    /// Config key that lists targets of this domain.
    pub fn field(self) -> &'static str {
        match self {
            TargetDomain::EnvVar => "vars",
            TargetDomain::Path => "paths",
        }
    }
}

/// Catalogue entry for one exam kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExamInfo {
    pub tag: &'static str,
    pub domain: TargetDomain,
    /// Extra descriptor fields the exam reads, besides targets and level.
    pub fields: &'static [&'static str],
    pub summary: &'static str,
}

const CATALOG: &[ExamInfo] = &[
    ExamInfo {
        tag: ids::EXAM_ENV_IS_SET,
        domain: TargetDomain::EnvVar,
        fields: &[],
        summary: "variable is set",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_NOT_EMPTY,
        domain: TargetDomain::EnvVar,
        fields: &[],
        summary: "variable is set and not blank",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_REGEX,
        domain: TargetDomain::EnvVar,
        fields: &["regex"],
        summary: "variable matches a regular expression",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_OPTIONS,
        domain: TargetDomain::EnvVar,
        fields: &["options"],
        summary: "variable is one of a fixed set of values",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_INT,
        domain: TargetDomain::EnvVar,
        fields: &[],
        summary: "variable is an integer",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_INT_RANGE,
        domain: TargetDomain::EnvVar,
        fields: &["min", "max"],
        summary: "variable is an integer within [min, max]",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_FLOAT,
        domain: TargetDomain::EnvVar,
        fields: &[],
        summary: "variable is a floating point number",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_FLOAT_RANGE,
        domain: TargetDomain::EnvVar,
        fields: &["min", "max"],
        summary: "variable is a floating point number within [min, max]",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_FILE,
        domain: TargetDomain::EnvVar,
        fields: &["exists"],
        summary: "variable points to a file (or, with exists = false, to nothing)",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_DIR,
        domain: TargetDomain::EnvVar,
        fields: &["exists"],
        summary: "variable points to a directory (or, with exists = false, to nothing)",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_IPV4,
        domain: TargetDomain::EnvVar,
        fields: &[],
        summary: "variable is an IPv4 address",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_IPV6,
        domain: TargetDomain::EnvVar,
        fields: &[],
        summary: "variable is an IPv6 address",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_IP,
        domain: TargetDomain::EnvVar,
        fields: &[],
        summary: "variable is an IPv4 or IPv6 address",
    },
    ExamInfo {
        tag: ids::EXAM_ENV_HOSTNAME,
        domain: TargetDomain::EnvVar,
        fields: &["protocol"],
        summary: "variable is a URL, optionally with a required scheme",
    },
    ExamInfo {
        tag: ids::EXAM_FILE_PATH,
        domain: TargetDomain::Path,
        fields: &["exists"],
        summary: "path exists (or, with exists = false, does not)",
    },
    ExamInfo {
        tag: ids::EXAM_FILE_IS_FILE,
        domain: TargetDomain::Path,
        fields: &[],
        summary: "path is a regular file",
    },
    ExamInfo {
        tag: ids::EXAM_FILE_IS_DIR,
        domain: TargetDomain::Path,
        fields: &[],
        summary: "path is a directory",
    },
    ExamInfo {
        tag: ids::EXAM_FILE_IS_EMPTY,
        domain: TargetDomain::Path,
        fields: &[],
        summary: "path is an empty file or directory",
    },
    ExamInfo {
        tag: ids::EXAM_FILE_IS_NOT_EMPTY,
        domain: TargetDomain::Path,
        fields: &[],
        summary: "path is a non-empty file or directory",
    },
];

/// Look up catalogue information by exam tag.
///
/// Returns `None` if the tag is not recognized.
pub fn lookup_exam_info(tag: &str) -> Option<&'static ExamInfo> {
    CATALOG.iter().find(|info| info.tag == tag)
}

/// List every known exam tag, `env.*` first, in catalogue order.
pub fn all_exam_tags() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|info| info.tag)
}

/// All catalogue entries.
pub fn all_exams() -> &'static [ExamInfo] {
    CATALOG
}
