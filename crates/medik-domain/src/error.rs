use crate::engine::ExamOrigin;

/// Why a descriptor could not become a typed exam.
///
/// Every variant is fatal for the whole run: a configuration that cannot be parsed is never
/// partially evaluated.
#[derive(Debug, thiserror::Error)]
pub enum ExamParseError {
    #[error("unknown exam type '{exam}'")]
    UnknownExam { exam: String },

    /// A parser was handed a descriptor of another kind. This is a registry bug, not a user error.
    #[error("wrong exam parser: using {expected} parser for a {found} exam")]
    WrongParser {
        expected: &'static str,
        found: String,
    },

    #[error("exam '{exam}' has no targets (set `{field}`)")]
    MissingTargets {
        exam: &'static str,
        field: &'static str,
    },

    /// Targets were listed under the other family's key, e.g. `paths` on an `env.*` exam.
    #[error("exam '{exam}' does not read `{field}`; list its targets under `{expected}`")]
    ForeignTargets {
        exam: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("exam '{exam}' is missing required field `{field}`")]
    MissingField {
        exam: &'static str,
        field: &'static str,
    },

    #[error("exam '{exam}' field `{field}` should be {expected}, got {found} ({value})")]
    WrongFieldType {
        exam: &'static str,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
        value: String,
    },

    #[error("exam '{exam}' field `{field}` has invalid value '{value}': {message}")]
    InvalidField {
        exam: &'static str,
        field: &'static str,
        value: String,
        message: String,
    },

    #[error("exam '{exam}' has invalid regex '{pattern}': {source}")]
    InvalidRegex {
        exam: &'static str,
        pattern: String,
        source: regex::Error,
    },
}

/// A parse error tied to the exam that caused it.
#[derive(Debug, thiserror::Error)]
#[error("exam #{position} in {origin}: {source}")]
pub struct RunError {
    pub origin: ExamOrigin,
    /// 1-based position of the exam within its list.
    pub position: usize,
    pub source: ExamParseError,
}
