//! Credential materialization: environment variable in, file out.

use std::fs;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, info};

use crate::domain::errors::{MaterializeError, MaterializeResult};
use crate::domain::models::{CredentialsConfig, MaterializationState, Materialized};
use crate::domain::ports::EnvSource;

/// Decodes one base64 environment variable into one file.
///
/// A run reads the variable once, decodes it fully in memory and only then
/// touches the filesystem, so a missing or malformed value never leaves a
/// partial file behind.
#[derive(Debug, Clone)]
pub struct CredentialMaterializer<E> {
    env: E,
    config: CredentialsConfig,
}

impl<E: EnvSource> CredentialMaterializer<E> {
    pub const fn new(env: E, config: CredentialsConfig) -> Self {
        Self { env, config }
    }

    pub const fn config(&self) -> &CredentialsConfig {
        &self.config
    }

    /// Read, decode and write. The output file is truncated if it exists.
    pub fn materialize(&self) -> MaterializeResult<Materialized> {
        debug!(
            env_var = %self.config.env_var,
            output_path = %self.config.output_path.display(),
            state = %MaterializationState::Pending,
            "materializing credentials"
        );

        self.run().inspect_err(|err| {
            debug!(
                env_var = %self.config.env_var,
                kind = err.kind(),
                state = %MaterializationState::Failed,
                "{err}"
            );
        })
    }

    fn run(&self) -> MaterializeResult<Materialized> {
        let var = &self.config.env_var;

        let encoded = self
            .env
            .var(var)
            .map(|value| strip_whitespace(&value))
            .filter(|value| !value.is_empty())
            .ok_or_else(|| MaterializeError::MissingInput { var: var.clone() })?;

        let decoded = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|source| MaterializeError::Decode {
                var: var.clone(),
                source,
            })?;

        let path = &self.config.output_path;
        fs::write(path, &decoded).map_err(|source| MaterializeError::Write {
            path: path.clone(),
            source,
        })?;

        info!(
            env_var = %var,
            output_path = %path.display(),
            bytes = decoded.len(),
            state = %MaterializationState::Succeeded,
            "credentials file written"
        );

        Ok(Materialized {
            env_var: var.clone(),
            output_path: path.clone(),
            bytes_written: decoded.len(),
        })
    }
}

/// Drop ASCII whitespace, including line wrapping from `base64` tools.
fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}
