//! Infrastructure layer module
//!
//! Adapters between the materializer and the outside world:
//! - Configuration management
//! - Process environment access
//! - Logging infrastructure

pub mod config;
pub mod env;
pub mod logging;
