use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "materialize.yaml";

/// Prefix for environment overrides, nested keys are split on `__`
pub const ENV_PREFIX: &str = "MATERIALIZE_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Input variable name cannot be empty")]
    EmptyEnvVar,

    #[error("Invalid input variable name: {0:?}. Must not contain '=' or NUL")]
    InvalidEnvVar(String),

    #[error("Output path cannot be empty")]
    EmptyOutputPath,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `explicit` if given (must exist), otherwise `materialize.yaml` in the
    ///    working directory (optional)
    /// 3. Environment variables (`MATERIALIZE_*` prefix, highest priority)
    ///
    /// The file is looked up at exactly that path, never in parent
    /// directories. The result is not validated: CLI flags are applied on
    /// top by the caller, which then runs [`ConfigLoader::validate`].
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let config = Self::figment(explicit)?
            .extract::<Config>()
            .map_err(Box::new)?;
        Ok(config)
    }

    /// Build the provider stack without extracting it
    pub fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let file = match explicit {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file_exact(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let env_var = &config.credentials.env_var;
        if env_var.is_empty() {
            return Err(ConfigError::EmptyEnvVar);
        }
        if env_var.contains(['=', '\0']) {
            return Err(ConfigError::InvalidEnvVar(env_var.clone()));
        }

        if config.credentials.output_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
