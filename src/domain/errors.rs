//! Domain errors for the credential materializer.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a missing or empty input variable.
pub const EXIT_MISSING_INPUT: i32 = 1;

/// Exit status for malformed base64 input (`EX_DATAERR`).
pub const EXIT_DECODE_FAILURE: i32 = 65;

/// Exit status for a failed output write (`EX_IOERR`).
pub const EXIT_WRITE_FAILURE: i32 = 74;

/// Exit status for an invalid configuration (`EX_CONFIG`).
pub const EXIT_CONFIG_FAILURE: i32 = 78;

/// Errors that terminate a materialization run.
///
/// None of the variants carry the variable's value or the decoded bytes.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("{var} environment variable not set")]
    MissingInput { var: String },

    #[error("{var} does not contain valid base64: {}", describe_decode_error(.source))]
    Decode {
        var: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Describe a decode failure by position only. The offending byte is part of
/// the secret and is left out.
fn describe_decode_error(err: &base64::DecodeError) -> String {
    match err {
        base64::DecodeError::InvalidByte(offset, _) => {
            format!("invalid character at offset {offset}")
        }
        base64::DecodeError::InvalidLength(len) => format!("invalid length {len}"),
        base64::DecodeError::InvalidLastSymbol(offset, _) => {
            format!("invalid trailing character at offset {offset}")
        }
        base64::DecodeError::InvalidPadding => "invalid padding".to_string(),
    }
}

impl MaterializeError {
    /// Process exit status the host build pipeline sees for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput { .. } => EXIT_MISSING_INPUT,
            Self::Decode { .. } => EXIT_DECODE_FAILURE,
            Self::Write { .. } => EXIT_WRITE_FAILURE,
        }
    }

    /// Short machine-readable kind, used in JSON output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => "missing_input",
            Self::Decode { .. } => "decode_failure",
            Self::Write { .. } => "write_failure",
        }
    }
}

pub type MaterializeResult<T> = Result<T, MaterializeError>;
