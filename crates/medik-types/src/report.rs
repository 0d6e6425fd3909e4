use crate::catalog::TargetDomain;
use crate::severity::Severity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome for a single target of an exam.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TargetOutcome {
    Valid,
    /// The variable is unset, or the path does not exist.
    Missing,
    Invalid {
        /// The offending value; `None` for path exams where the target itself is the value.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        reason: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TargetStatus {
    pub target: String,
    #[serde(flatten)]
    pub outcome: TargetOutcome,
}

impl TargetStatus {
    pub fn valid(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            outcome: TargetOutcome::Valid,
        }
    }

    pub fn missing(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            outcome: TargetOutcome::Missing,
        }
    }

    pub fn invalid_value(
        target: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            outcome: TargetOutcome::Invalid {
                value: Some(value.into()),
                reason: reason.into(),
            },
        }
    }

    pub fn invalid(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            outcome: TargetOutcome::Invalid {
                value: None,
                reason: reason.into(),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, TargetOutcome::Valid)
    }

    /// Human-readable message, worded for the exam's target domain.
    pub fn message(&self, domain: TargetDomain) -> String {
        match &self.outcome {
            TargetOutcome::Valid => "is valid".to_string(),
            TargetOutcome::Missing => match domain {
                TargetDomain::EnvVar => "is not set".to_string(),
                TargetDomain::Path => "does not exist".to_string(),
            },
            TargetOutcome::Invalid {
                value: Some(value),
                reason,
            } => format!("'{value}' is not valid: {reason}"),
            TargetOutcome::Invalid {
                value: None,
                reason,
            } => reason.clone(),
        }
    }
}

/// The evaluated result of one exam.
///
/// `level` is the exam's configured severity. It only surfaces when at least one target is
/// missing or invalid; a report whose targets are all valid is `Ok`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExamReport {
    pub exam: String,
    pub domain: TargetDomain,
    pub level: Severity,
    pub statuses: Vec<TargetStatus>,
}

impl ExamReport {
    pub fn new(exam: impl Into<String>, domain: TargetDomain, level: Severity) -> Self {
        Self {
            exam: exam.into(),
            domain,
            level,
            statuses: Vec::new(),
        }
    }

    pub fn push(&mut self, status: TargetStatus) {
        self.statuses.push(status);
    }

    pub fn severity(&self) -> Severity {
        if self.statuses.iter().all(TargetStatus::is_valid) {
            Severity::Ok
        } else {
            self.level
        }
    }

    /// Severity attributed to one status line: `Ok` when valid, the configured level otherwise.
    pub fn status_severity(&self, status: &TargetStatus) -> Severity {
        if status.is_valid() {
            Severity::Ok
        } else {
            self.level
        }
    }

    /// Render the report as level-tagged text lines.
    ///
    /// The header is always present. Body lines are kept only when their severity is at least
    /// `min_verbosity`.
    pub fn format(&self, min_verbosity: Severity) -> FormattedReport {
        let severity = self.severity();
        let header = FormattedLine {
            severity,
            label: severity.label().to_string(),
            text: self.exam.clone(),
        };

        let body = self
            .statuses
            .iter()
            .filter_map(|status| {
                let level = self.status_severity(status);
                (level >= min_verbosity).then(|| FormattedLine {
                    severity: level,
                    label: status.target.clone(),
                    text: status.message(self.domain),
                })
            })
            .collect();

        FormattedReport {
            severity,
            header,
            body,
        }
    }
}

/// One output line without styling: a level, a short label and free text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedLine {
    pub severity: Severity,
    pub label: String,
    pub text: String,
}

impl fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedReport {
    pub severity: Severity,
    pub header: FormattedLine,
    pub body: Vec<FormattedLine>,
}
