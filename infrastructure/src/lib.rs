//! Infrastructure layer for stitch-invoke
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod auth;
pub mod config;
pub mod transport;

// Re-export commonly used types
pub use auth::{AmbientCredentialProvider, CredentialSource};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAuthConfig, FileConfig, FileServiceConfig,
};
pub use transport::{HttpToolTransport, TransportBuildError};
