//! Command-line interface.

pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::domain::errors::{MaterializeError, EXIT_CONFIG_FAILURE};
use crate::domain::models::Config;
use crate::domain::ports::EnvSource;
use crate::infrastructure::config::{ConfigError, ConfigLoader};
use crate::services::CredentialMaterializer;

pub use output::{output, CommandOutput, FailureOutput, MaterializeOutput};

/// Decode a base64-encoded environment variable into a credentials file.
///
/// Reads GOOGLE_CREDENTIALS_JSON by default and writes google_credentials.json
/// in the working directory.
#[derive(Parser, Debug)]
#[command(
    name = "materialize-credentials",
    version,
    about,
    after_help = "Examples:\n  GOOGLE_CREDENTIALS_JSON=$(base64 -w0 key.json) materialize-credentials\n  materialize-credentials --env-var FIREBASE_CREDENTIALS -o firebase.json\n  materialize-credentials --json"
)]
pub struct Cli {
    /// Environment variable holding the base64-encoded credentials
    #[arg(long, value_name = "NAME")]
    pub env_var: Option<String>,

    /// File to write the decoded credentials to
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./materialize.yaml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Apply flags on top of loaded configuration. Flags win.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref env_var) = self.env_var {
            config.credentials.env_var.clone_from(env_var);
        }
        if let Some(ref path) = self.output {
            config.credentials.output_path.clone_from(path);
        }
        if let Some(ref level) = self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}

/// Load the layered configuration, apply CLI overrides, then validate the
/// merged result once.
pub fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Run one materialization against `env`.
pub fn run<E: EnvSource>(config: &Config, env: E) -> Result<MaterializeOutput> {
    let materializer = CredentialMaterializer::new(env, config.credentials.clone());
    let materialized = materializer
        .materialize()
        .context("Credential materialization failed")?;
    Ok(materialized.into())
}

/// Exit status for an error coming out of [`load_config`] or [`run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<MaterializeError>() {
        return err.exit_code();
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return EXIT_CONFIG_FAILURE;
    }
    1
}

fn failure_output(err: &anyhow::Error) -> FailureOutput {
    if let Some(err) = err.downcast_ref::<MaterializeError>() {
        return FailureOutput::from(err);
    }
    if let Some(config_err) = err.downcast_ref::<ConfigError>() {
        return FailureOutput::new("config", config_err.to_string(), EXIT_CONFIG_FAILURE);
    }
    FailureOutput::new("internal", format!("{err:#}"), exit_code(err))
}

/// Print the failure diagnostic for `err` and return the exit status.
///
/// Human output goes to stderr; JSON output goes to stdout so callers can
/// parse it the same way as a success result.
pub fn report_error(err: &anyhow::Error, json_mode: bool) -> i32 {
    let report = failure_output(err);
    if json_mode {
        output(&report, true);
    } else {
        eprintln!("{}", report.to_human());
    }
    report.exit_code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::StaticEnv;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_win() {
        let cli = Cli::try_parse_from([
            "materialize-credentials",
            "--env-var",
            "FIREBASE_CREDENTIALS",
            "-o",
            "out/firebase.json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.credentials.env_var, "FIREBASE_CREDENTIALS");
        assert_eq!(
            config.credentials.output_path,
            PathBuf::from("out/firebase.json")
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["materialize-credentials"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_run_reports_created_file() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.credentials.output_path = dir.path().join("google_credentials.json");

        let env = StaticEnv::new().with_var(
            "GOOGLE_CREDENTIALS_JSON",
            "eyJ0eXBlIjoic2VydmljZV9hY2NvdW50In0=",
        );
        let out = run(&config, env).unwrap();

        assert!(out.success);
        assert_eq!(out.bytes_written, 26);
        assert!(out.message.ends_with("google_credentials.json file created"));
    }

    #[test]
    fn test_exit_code_survives_context() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.credentials.output_path = dir.path().join("google_credentials.json");

        let err = run(&config, StaticEnv::new()).unwrap_err();

        assert_eq!(exit_code(&err), 1);
        let report = failure_output(&err);
        assert_eq!(report.kind, "missing_input");
        assert_eq!(
            report.error,
            "GOOGLE_CREDENTIALS_JSON environment variable not set"
        );
    }

    #[test]
    fn test_config_errors_map_to_ex_config() {
        let err = anyhow::Error::new(ConfigError::EmptyOutputPath);
        assert_eq!(exit_code(&err), EXIT_CONFIG_FAILURE);
        assert_eq!(failure_output(&err).kind, "config");
    }

    #[test]
    fn test_other_errors_exit_one() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code(&err), 1);
    }
}
