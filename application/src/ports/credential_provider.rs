//! Credential provider port
//!
//! Defines how the application obtains a fresh bearer token from the
//! ambient identity. The identity provider itself is external; adapters in
//! the infrastructure layer talk to it.

use async_trait::async_trait;
use stitch_domain::{AuthHeaders, Credential};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a call before any request reaches the service
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No ambient credentials found (tried: {tried})")]
    NoCredentials { tried: String },

    #[error("Failed to read credentials file {path}: {reason}")]
    CredentialFile { path: PathBuf, reason: String },

    #[error("Unsupported credential type '{0}'")]
    UnsupportedCredentialType(String),

    #[error("Token endpoint returned HTTP {status}: {body}")]
    TokenEndpoint { status: u16, body: String },

    #[error("Token request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid token response: {0}")]
    InvalidTokenResponse(String),
}

/// Source of refreshed credentials
///
/// Implementations must refresh on every call; a cached token is never
/// returned as-is.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Refresh the ambient identity and return the current credential
    async fn refresh(&self) -> Result<Credential, AuthError>;

    /// Refresh, then build the headers for an authenticated call
    async fn acquire_headers(&self) -> Result<AuthHeaders, AuthError> {
        let credential = self.refresh().await?;
        Ok(AuthHeaders::from_credential(&credential))
    }
}
