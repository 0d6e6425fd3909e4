//! CLI entry point for medik.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `medik-app` crate.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use medik_app::{
    CheckInput, format_exam_list, render_run, run_check, run_list_exams, severity_exit_code,
};
use medik_domain::ProcessEnv;
use medik_render::RenderOptions;
use medik_settings::{ConfigFormat, Overrides};
use medik_types::Severity;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config files looked up in the working directory when `--config` is not given.
const DEFAULT_CONFIGS: [&str; 4] = ["medik.yaml", "medik.yml", "medik.toml", "medik.json"];
const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Parser, Debug)]
#[command(
    name = "medik",
    version,
    about = "Declarative pre-flight health checks for environment variables and paths"
)]
struct Cli {
    /// Path to the config file: YAML, or TOML/JSON by extension
    /// [default: first of medik.yaml, medik.yml, medik.toml, medik.json].
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Env file layered over the process environment [default: .env, skipped if absent].
    #[arg(long, short = 'e')]
    env: Option<PathBuf>,

    /// Lowest status level printed under each exam.
    #[arg(long, value_enum, conflicts_with_all = ["verbose", "quiet"])]
    verbosity: Option<VerbosityArg>,

    /// Print every status, including valid ones (same as `--verbosity ok`).
    #[arg(short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Only print error statuses (same as `--verbosity error`).
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,

    /// Log debug diagnostics to stderr (`MEDIK_LOG` overrides).
    #[arg(long)]
    debug: bool,

    /// List every exam type and exit.
    #[arg(long)]
    list_exams: bool,

    /// Print the JSON schema of the config file and exit.
    #[arg(long)]
    print_schema: bool,

    /// Protocols to run in addition to the base exams.
    protocols: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VerbosityArg {
    Ok,
    Warning,
    Error,
}

impl Cli {
    fn verbosity_override(&self) -> Option<Severity> {
        match (self.verbosity, self.verbose, self.quiet) {
            (Some(VerbosityArg::Ok), _, _) | (None, true, _) => Some(Severity::Ok),
            (Some(VerbosityArg::Warning), _, _) => Some(Severity::Warning),
            (Some(VerbosityArg::Error), _, _) | (None, _, true) => Some(Severity::Error),
            (None, false, false) => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if cli.list_exams {
        print!("{}", format_exam_list(run_list_exams()));
        return Ok(());
    }

    if cli.print_schema {
        let schema = serde_json::to_string_pretty(&medik_settings::config_schema())
            .context("serialize config schema")?;
        println!("{schema}");
        return Ok(());
    }

    match cmd_check(&cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("medik error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => find_default_config()?,
    };
    let config_text = std::fs::read_to_string(&config_path)
        .with_context(|| format!("read config {}", config_path.display()))?;
    let env_text = read_env_file(cli.env.as_deref())?;

    let input = CheckInput {
        config_text: &config_text,
        format: ConfigFormat::from_path(&config_path),
        env_text: env_text.as_deref(),
        protocols: &cli.protocols,
        overrides: Overrides {
            verbosity: cli.verbosity_override(),
        },
    };

    let output = run_check(input, &ProcessEnv)?;

    let options = RenderOptions {
        color: !cli.no_color,
    };
    print!(
        "{}",
        render_run(&output.result, output.resolved_config.verbosity, &options)
    );

    Ok(severity_exit_code(output.result.severity))
}

fn find_default_config() -> anyhow::Result<PathBuf> {
    let found = DEFAULT_CONFIGS
        .into_iter()
        .map(PathBuf::from)
        .find(|path| path.is_file());

    match found {
        Some(path) => {
            debug!(config = %path.display(), "using default config");
            Ok(path)
        }
        None => anyhow::bail!(
            "no config file found (looked for {})",
            DEFAULT_CONFIGS.join(", ")
        ),
    }
}

/// An explicit env file must exist; the default one is optional.
fn read_env_file(explicit: Option<&Path>) -> anyhow::Result<Option<String>> {
    if let Some(path) = explicit {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read env file {}", path.display()))?;
        return Ok(Some(text));
    }

    match std::fs::read_to_string(DEFAULT_ENV_FILE) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no {DEFAULT_ENV_FILE} file; using the process environment only");
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| format!("read env file {DEFAULT_ENV_FILE}")),
    }
}

fn init_logging(debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MEDIK_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("logging initialized at level: {}", level);
}
