//! Domain layer for the credential materializer
//!
//! This module contains the core model, error taxonomy and the ports the
//! materializer depends on.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{MaterializeError, MaterializeResult};
