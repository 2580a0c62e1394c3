//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Default service endpoint
pub const DEFAULT_ENDPOINT: &str = "https://stitch.googleapis.com/mcp";

/// Default platform access scope
pub const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Default quota project billed for calls
pub const DEFAULT_QUOTA_PROJECT: &str = "gen-lang-client-0012133935";

/// Default OAuth token endpoint for user credentials
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Default metadata server host
pub const DEFAULT_METADATA_HOST: &str = "metadata.google.internal";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("service.timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("service.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("auth.scope cannot be empty")]
    EmptyScope,

    #[error("auth.quota_project cannot be empty")]
    EmptyQuotaProject,
}

/// Remote service settings (`[service]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// JSON-RPC endpoint
    pub endpoint: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Extra PEM CA bundle trusted in addition to the built-in roots
    pub ca_bundle: Option<PathBuf>,
    /// Allow plain `http` endpoints on loopback hosts (local testing)
    pub allow_http: bool,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 180,
            ca_bundle: None,
            allow_http: false,
        }
    }
}

/// Identity settings (`[auth]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Access scope requested for the ambient identity
    pub scope: String,
    /// Quota project bound to every credential
    pub quota_project: String,
    /// Token endpoint used to refresh user credentials
    pub token_uri: String,
    /// Explicit credentials file, checked before the environment
    pub credentials_file: Option<PathBuf>,
    /// Metadata server host (`host` or `host:port`)
    pub metadata_host: String,
    /// Timeout for identity provider calls in seconds
    pub token_timeout_secs: u64,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self {
            scope: DEFAULT_SCOPE.to_string(),
            quota_project: DEFAULT_QUOTA_PROJECT.to_string(),
            token_uri: DEFAULT_TOKEN_URI.to_string(),
            credentials_file: None,
            metadata_host: DEFAULT_METADATA_HOST.to_string(),
            token_timeout_secs: 30,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote service settings
    pub service: FileServiceConfig,
    /// Identity settings
    pub auth: FileAuthConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.service.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.service.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if self.auth.scope.trim().is_empty() {
            return Err(ConfigValidationError::EmptyScope);
        }
        if self.auth.quota_project.trim().is_empty() {
            return Err(ConfigValidationError::EmptyQuotaProject);
        }
        Ok(())
    }
}
