pub mod materializer;

pub use materializer::CredentialMaterializer;
