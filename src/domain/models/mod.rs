pub mod config;
pub mod materialization;

pub use config::{Config, CredentialsConfig, LogFormat, LoggingConfig};
pub use materialization::{MaterializationState, Materialized};
