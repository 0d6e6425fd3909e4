//! Config parsing, env-file parsing and run input resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod envfile;
mod model;
mod resolve;

use std::path::Path;

pub use envfile::parse_env_file;
pub use model::{MedikConfigV1, ProtocolConfig};
pub use resolve::{CONFIG_SCHEMA_V1, Overrides, ResolvedConfig};

/// Config document syntax.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.toml` and `.json` select those syntaxes; anything else (`.yaml`, `.yml`, no extension)
    /// is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse `medik.yaml` into a typed model. A document with no content (only comments) is an
/// empty config.
pub fn parse_config_yaml(input: &str) -> anyhow::Result<MedikConfigV1> {
    let cfg: Option<MedikConfigV1> = serde_yaml::from_str(input)?;
    Ok(cfg.unwrap_or_default())
}

pub fn parse_config_toml(input: &str) -> anyhow::Result<MedikConfigV1> {
    let cfg: MedikConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

pub fn parse_config_json(input: &str) -> anyhow::Result<MedikConfigV1> {
    let cfg: MedikConfigV1 = serde_json::from_str(input)?;
    Ok(cfg)
}

pub fn parse_config(input: &str, format: ConfigFormat) -> anyhow::Result<MedikConfigV1> {
    match format {
        ConfigFormat::Yaml => parse_config_yaml(input),
        ConfigFormat::Toml => parse_config_toml(input),
        ConfigFormat::Json => parse_config_json(input),
    }
}

/// Resolve the run input used by the engine (protocol lists + overrides).
pub fn resolve_config(cfg: MedikConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of the config document.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(MedikConfigV1)
}
