use crate::catalog::TargetDomain;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One configured check, as written in the config document.
///
/// This is a *user-facing* model: fields are loosely typed and optional so that every exam kind
/// can share it. Exam parsers in `medik-domain` turn it into a validated, kind-specific value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExamDescriptor {
    /// Exam type tag, e.g. `env.regex` or `file.is-dir`.
    #[serde(rename = "exam", alias = "type")]
    pub kind: String,

    /// Environment variable names, read by `env.*` exams.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vars: Vec<String>,

    /// Filesystem paths, read by `file.*` exams.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,

    /// Configured level: `ok`, `warning` or `error` (default).
    #[serde(
        default,
        rename = "level",
        alias = "severity",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<String>,

    /// Pattern for `env.regex`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    /// Allowed values for `env.options`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Inclusive lower bound for `env.int-range` / `env.float-range`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<NumericBound>,

    /// Inclusive upper bound for `env.int-range` / `env.float-range`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<NumericBound>,

    /// Expected existence for `env.file`, `env.dir` and `file.path` (default `true`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,

    /// Required URL scheme for `env.hostname`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl ExamDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets: Vec<String> = targets.into_iter().map(Into::into).collect();
        match TargetDomain::of_tag(&self.kind) {
            TargetDomain::EnvVar => self.vars = targets,
            TargetDomain::Path => self.paths = targets,
        }
        self
    }

    /// Targets listed under `domain`'s key.
    pub fn targets(&self, domain: TargetDomain) -> &[String] {
        match domain {
            TargetDomain::EnvVar => &self.vars,
            TargetDomain::Path => &self.paths,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn exists_or_default(&self) -> bool {
        self.exists.unwrap_or(true)
    }
}

/// A numeric config value whose integer/float kind is preserved from the source document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum NumericBound {
    Int(i64),
    Float(f64),
}

impl NumericBound {
    pub fn kind_name(&self) -> &'static str {
        match self {
            NumericBound::Int(_) => "an integer",
            NumericBound::Float(_) => "a float",
        }
    }
}

impl fmt::Display for NumericBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericBound::Int(v) => write!(f, "{v}"),
            NumericBound::Float(v) => write!(f, "{v:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_keeps_integer_and_float_bounds_apart() {
        let d: ExamDescriptor = toml::from_str(
            r#"
exam = "env.int-range"
vars = ["V"]
min = 0
max = 10.5
"#,
        )
        .expect("parse descriptor");

        assert_eq!(d.kind, "env.int-range");
        assert_eq!(d.vars, vec!["V".to_string()]);
        assert!(d.paths.is_empty());
        assert_eq!(d.min, Some(NumericBound::Int(0)));
        assert_eq!(d.max, Some(NumericBound::Float(10.5)));
    }

    #[test]
    fn json_accepts_type_and_severity_aliases() {
        let d: ExamDescriptor = serde_json::from_str(
            r#"{"type": "file.is-dir", "paths": ["/tmp"], "severity": "warning", "min": 1.0}"#,
        )
        .expect("parse descriptor");

        assert_eq!(d.kind, "file.is-dir");
        assert_eq!(d.targets(TargetDomain::Path), ["/tmp".to_string()]);
        assert_eq!(d.level.as_deref(), Some("warning"));
        assert_eq!(d.min, Some(NumericBound::Float(1.0)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<ExamDescriptor>(r#"{"exam": "env.is-set", "varz": []}"#);
        assert!(err.is_err());
    }

    #[test]
    fn with_targets_fills_the_family_key() {
        let env = ExamDescriptor::new("env.is-set").with_targets(["A"]);
        assert_eq!(env.vars, ["A"]);
        assert!(env.paths.is_empty());

        let file = ExamDescriptor::new("file.path").with_targets(["/etc"]);
        assert_eq!(file.paths, ["/etc"]);
        assert!(file.vars.is_empty());
    }

    #[test]
    fn targets_key_is_not_accepted() {
        let err = serde_json::from_str::<ExamDescriptor>(r#"{"exam": "env.is-set", "targets": ["A"]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn exists_defaults_to_true() {
        assert!(ExamDescriptor::new("file.path").exists_or_default());
        let mut d = ExamDescriptor::new("file.path");
        d.exists = Some(false);
        assert!(!d.exists_or_default());
    }

    #[test]
    fn bound_display_keeps_kind() {
        assert_eq!(NumericBound::Int(3).to_string(), "3");
        assert_eq!(NumericBound::Float(3.0).to_string(), "3.0");
    }
}
