use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Lifecycle of a single run: `Pending -> {Succeeded, Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterializationState {
    Pending,
    Succeeded,
    Failed,
}

impl MaterializationState {
    /// Both outcomes are final, there is no retry.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for MaterializationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A credentials file that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// Variable the payload was read from
    pub env_var: String,
    /// File that now holds the decoded bytes
    pub output_path: PathBuf,
    /// Number of decoded bytes written
    pub bytes_written: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_outcomes_are_terminal() {
        assert!(!MaterializationState::Pending.is_terminal());
        assert!(MaterializationState::Succeeded.is_terminal());
        assert!(MaterializationState::Failed.is_terminal());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(MaterializationState::Succeeded.to_string(), "succeeded");
        assert_eq!(
            serde_json::to_value(MaterializationState::Failed).unwrap(),
            serde_json::json!("failed")
        );
    }
}
