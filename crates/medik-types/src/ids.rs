//! Stable identifiers for exam kinds.
//!
//! A tag is `<family>.<kind>`; the family prefix selects which target domain the exam reads.

// Families
pub const FAMILY_ENV: &str = "env";
pub const FAMILY_FILE: &str = "file";

// Exams: env.*
pub const EXAM_ENV_IS_SET: &str = "env.is-set";
pub const EXAM_ENV_NOT_EMPTY: &str = "env.not-empty";
pub const EXAM_ENV_REGEX: &str = "env.regex";
pub const EXAM_ENV_OPTIONS: &str = "env.options";
pub const EXAM_ENV_INT: &str = "env.int";
pub const EXAM_ENV_INT_RANGE: &str = "env.int-range";
pub const EXAM_ENV_FLOAT: &str = "env.float";
pub const EXAM_ENV_FLOAT_RANGE: &str = "env.float-range";
pub const EXAM_ENV_FILE: &str = "env.file";
pub const EXAM_ENV_DIR: &str = "env.dir";
pub const EXAM_ENV_IPV4: &str = "env.ipv4";
pub const EXAM_ENV_IPV6: &str = "env.ipv6";
pub const EXAM_ENV_IP: &str = "env.ip";
pub const EXAM_ENV_HOSTNAME: &str = "env.hostname";

// Exams: file.*
pub const EXAM_FILE_PATH: &str = "file.path";
pub const EXAM_FILE_IS_FILE: &str = "file.is-file";
pub const EXAM_FILE_IS_DIR: &str = "file.is-dir";
pub const EXAM_FILE_IS_EMPTY: &str = "file.is-empty";
pub const EXAM_FILE_IS_NOT_EMPTY: &str = "file.is-not-empty";

/// Split a tag into its family prefix and the remainder.
///
/// Returns `None` when the tag has no `.` separator.
pub fn split_tag(tag: &str) -> Option<(&str, &str)> {
    tag.split_once('.')
}
