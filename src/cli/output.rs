//! Output formatting utilities for the CLI.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::errors::MaterializeError;
use crate::domain::models::{MaterializationState, Materialized};

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Result of a successful run
#[derive(Debug, Serialize)]
pub struct MaterializeOutput {
    pub success: bool,
    pub state: MaterializationState,
    pub env_var: String,
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub message: String,
}

impl From<Materialized> for MaterializeOutput {
    fn from(done: Materialized) -> Self {
        Self {
            success: true,
            state: MaterializationState::Succeeded,
            message: format!("{} file created", done.output_path.display()),
            env_var: done.env_var,
            output_path: done.output_path,
            bytes_written: done.bytes_written,
        }
    }
}

impl CommandOutput for MaterializeOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Failure report, printed on stderr in human mode and stdout in JSON mode
#[derive(Debug, Serialize)]
pub struct FailureOutput {
    pub success: bool,
    pub state: MaterializationState,
    pub kind: &'static str,
    pub error: String,
    pub exit_code: i32,
}

impl FailureOutput {
    pub fn new(kind: &'static str, error: String, exit_code: i32) -> Self {
        Self {
            success: false,
            state: MaterializationState::Failed,
            kind,
            error,
            exit_code,
        }
    }
}

impl From<&MaterializeError> for FailureOutput {
    fn from(err: &MaterializeError) -> Self {
        Self::new(err.kind(), err.to_string(), err.exit_code())
    }
}

impl CommandOutput for FailureOutput {
    fn to_human(&self) -> String {
        format!("Error: {}", self.error)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materialized() -> Materialized {
        Materialized {
            env_var: "GOOGLE_CREDENTIALS_JSON".to_string(),
            output_path: PathBuf::from("google_credentials.json"),
            bytes_written: 26,
        }
    }

    #[test]
    fn test_success_human_line() {
        let out = MaterializeOutput::from(materialized());
        assert_eq!(out.to_human(), "google_credentials.json file created");
    }

    #[test]
    fn test_success_json_shape() {
        let json = MaterializeOutput::from(materialized()).to_json();
        assert_eq!(json["success"], true);
        assert_eq!(json["state"], "succeeded");
        assert_eq!(json["env_var"], "GOOGLE_CREDENTIALS_JSON");
        assert_eq!(json["output_path"], "google_credentials.json");
        assert_eq!(json["bytes_written"], 26);
    }

    #[test]
    fn test_failure_from_missing_input() {
        let err = MaterializeError::MissingInput {
            var: "GOOGLE_CREDENTIALS_JSON".to_string(),
        };
        let out = FailureOutput::from(&err);

        assert_eq!(
            out.to_human(),
            "Error: GOOGLE_CREDENTIALS_JSON environment variable not set"
        );
        let json = out.to_json();
        assert_eq!(json["success"], false);
        assert_eq!(json["state"], "failed");
        assert_eq!(json["kind"], "missing_input");
        assert_eq!(json["exit_code"], 1);
    }
}
