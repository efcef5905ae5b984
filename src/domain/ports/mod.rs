//! Port traits the materializer depends on.

pub mod env_source;

pub use env_source::{EnvSource, StaticEnv};
