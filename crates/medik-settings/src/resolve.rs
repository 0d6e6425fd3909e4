use crate::model::MedikConfigV1;
use medik_types::{ExamDescriptor, Severity};
use std::collections::BTreeMap;

pub const CONFIG_SCHEMA_V1: &str = "medik.config.v1";

/// Values given on the command line; they win over the config document.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub verbosity: Option<Severity>,
}

/// Everything a run needs, in the shapes the engine consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub exams: Vec<ExamDescriptor>,
    pub protocols: BTreeMap<String, Vec<ExamDescriptor>>,
    pub verbosity: Severity,
}

pub fn resolve_config(cfg: MedikConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != CONFIG_SCHEMA_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {CONFIG_SCHEMA_V1})");
    }

    let verbosity = match (overrides.verbosity, cfg.verbosity.as_deref()) {
        (Some(v), _) => v,
        (None, Some(label)) => parse_verbosity(label)?,
        (None, None) => Severity::Warning,
    };

    let mut protocols = BTreeMap::new();
    for (name, protocol) in cfg.protocols {
        validate_protocol_name(&name)?;
        protocols.insert(name, protocol.exams);
    }

    Ok(ResolvedConfig {
        exams: cfg.exams,
        protocols,
        verbosity,
    })
}

fn parse_verbosity(v: &str) -> anyhow::Result<Severity> {
    Severity::from_label(v)
        .ok_or_else(|| anyhow::anyhow!("unknown verbosity: {v} (expected ok|warning|error)"))
}

fn validate_protocol_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty() {
        anyhow::bail!("protocol names cannot be empty");
    }
    if name.chars().any(char::is_whitespace) {
        anyhow::bail!("invalid protocol name '{name}': names cannot contain whitespace");
    }
    Ok(())
}
