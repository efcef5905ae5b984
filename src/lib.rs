//! Credential Materializer
//!
//! Build-step tool that decodes a base64-encoded environment variable
//! (`GOOGLE_CREDENTIALS_JSON` by default) into a credentials file
//! (`google_credentials.json` by default).
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration model, error taxonomy and the
//!   [`EnvSource`] port
//! - **Service Layer** (`services`): the [`CredentialMaterializer`]
//! - **Infrastructure Layer** (`infrastructure`): figment config loading,
//!   process environment, tracing setup
//! - **CLI Layer** (`cli`): argument parsing and result reporting
//!
//! # Example
//!
//! ```no_run
//! use credential_materializer::{CredentialMaterializer, CredentialsConfig, StaticEnv};
//!
//! let env = StaticEnv::new().with_var("GOOGLE_CREDENTIALS_JSON", "e30=");
//! let materializer = CredentialMaterializer::new(env, CredentialsConfig::default());
//! let written = materializer.materialize()?;
//! assert_eq!(written.bytes_written, 2);
//! # Ok::<(), credential_materializer::MaterializeError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{MaterializeError, MaterializeResult};
pub use domain::models::{
    Config, CredentialsConfig, LogFormat, LoggingConfig, MaterializationState, Materialized,
};
pub use domain::ports::{EnvSource, StaticEnv};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::env::ProcessEnv;
pub use services::CredentialMaterializer;
