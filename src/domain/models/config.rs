use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable read when nothing else is configured
pub const DEFAULT_ENV_VAR: &str = "GOOGLE_CREDENTIALS_JSON";

/// Output file written when nothing else is configured
pub const DEFAULT_OUTPUT_PATH: &str = "google_credentials.json";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Input variable and output artifact
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the encoded credentials come from and where they land
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialsConfig {
    /// Name of the environment variable holding the base64 payload
    #[serde(default = "default_env_var")]
    pub env_var: String,

    /// Output file, relative paths resolve against the working directory
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_env_var() -> String {
    DEFAULT_ENV_VAR.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            env_var: default_env_var(),
            output_path: default_output_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output format (json, pretty)
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for a JSON log file (optional, console only if None)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
        }
    }
}
