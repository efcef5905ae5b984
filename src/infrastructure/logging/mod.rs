//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Console output on stderr, pretty or JSON
//! - Optional JSON log file

pub mod logger;

pub use crate::domain::models::config::{LogFormat, LoggingConfig};
pub use logger::{LoggerImpl, LOG_FILE_NAME};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn};
