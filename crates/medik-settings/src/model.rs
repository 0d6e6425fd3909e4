use medik_types::ExamDescriptor;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Config document schema v1 (`medik.yaml`, `medik.toml` or `medik.json`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MedikConfigV1 {
    /// Optional schema string for tooling (`medik.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Lowest status level printed in report bodies: `ok`, `warning` (default) or `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<String>,

    /// Exams that run on every invocation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exams: Vec<ExamDescriptor>,

    /// Named exam groups that only run when requested on the command line.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub protocols: BTreeMap<String, ProtocolConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProtocolConfig {
    #[serde(default)]
    pub exams: Vec<ExamDescriptor>,
}
