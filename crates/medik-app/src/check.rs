//! The `check` use case: load config, evaluate exams, produce a run result.

use anyhow::Context;
use medik_domain::{Environment, LayeredEnv, RunResult};
use medik_settings::{ConfigFormat, Overrides, ResolvedConfig};
use medik_types::Severity;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if there is nothing to check).
    pub config_text: &'a str,
    pub format: ConfigFormat,
    /// Env file contents, layered over the base environment when present.
    pub env_text: Option<&'a str>,
    /// Protocols requested on the command line.
    pub protocols: &'a [String],
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub result: RunResult,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config and env file, run every activated exam.
///
/// `base` is the environment the env file is layered over; the CLI passes the process
/// environment.
pub fn run_check(input: CheckInput<'_>, base: &dyn Environment) -> anyhow::Result<CheckOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        medik_settings::MedikConfigV1::default()
    } else {
        medik_settings::parse_config(input.config_text, input.format).context("parse config")?
    };

    let resolved =
        medik_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;
    debug!(
        exams = resolved.exams.len(),
        protocols = resolved.protocols.len(),
        "config resolved"
    );

    let layer = match input.env_text {
        Some(text) => {
            let vars = medik_settings::parse_env_file(text).context("parse env file")?;
            info!(vars = vars.len(), "env file loaded");
            vars
        }
        None => BTreeMap::new(),
    };
    let env = LayeredEnv::new(layer, base);

    let result = medik_domain::run(
        &resolved.exams,
        input.protocols,
        &resolved.protocols,
        &env,
    )?;
    info!(
        reports = result.reports.len(),
        severity = %result.severity,
        "check finished"
    );

    Ok(CheckOutput {
        result,
        resolved_config: resolved,
    })
}

/// Process exit code for an overall severity. Configuration failures exit with 1 elsewhere.
pub fn severity_exit_code(severity: Severity) -> i32 {
    match severity {
        Severity::Ok => 0,
        Severity::Warning => 0,
        Severity::Error => 2,
    }
}
