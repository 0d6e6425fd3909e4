use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity is intentionally small: it is both the per-exam threshold and the outcome level.
///
/// The derived ordering is load-bearing: `Ok < Warning < Error`, and folding many severities
/// always keeps the worst one.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Ok, Severity::Warning, Severity::Error];

    /// Label used in headers and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Case-insensitive lookup of a configured level.
    pub fn from_label(label: &str) -> Option<Severity> {
        let label = label.trim();
        Severity::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }

    /// Resolve an exam's configured level; absent or unrecognised labels mean `Error`.
    pub fn resolve(label: Option<&str>) -> Severity {
        label.and_then(Severity::from_label).unwrap_or(Severity::Error)
    }

    /// Fold a sequence of severities into the worst one, with `Ok` as the floor.
    pub fn worst<I: IntoIterator<Item = Severity>>(severities: I) -> Severity {
        severities.into_iter().max().unwrap_or(Severity::Ok)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
