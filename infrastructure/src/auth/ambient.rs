//! Application Default Credentials provider

use super::credentials_file::CredentialsFile;
use super::token::{fetch_metadata_token, refresh_authorized_user};
use crate::config::FileAuthConfig;
use async_trait::async_trait;
use reqwest::Client;
use stitch_application::{AuthError, CredentialProvider};
use stitch_domain::Credential;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";
const GCLOUD_CONFIG_ENV: &str = "CLOUDSDK_CONFIG";
const WELL_KNOWN_FILE: &str = "application_default_credentials.json";

/// Where the ambient identity was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// A credentials file (explicit, from the environment, or gcloud's)
    File(PathBuf),
    /// The compute metadata server
    MetadataServer,
}

/// Credential provider backed by the ambient Google identity.
///
/// Every [`refresh`](CredentialProvider::refresh) re-runs discovery and hits
/// the identity provider; nothing is cached between calls.
pub struct AmbientCredentialProvider {
    client: Client,
    config: FileAuthConfig,
    env_credentials: Option<PathBuf>,
    well_known: Option<PathBuf>,
}

impl AmbientCredentialProvider {
    /// Create a provider that reads discovery paths from the process environment
    pub fn from_config(config: &FileAuthConfig) -> Result<Self, AuthError> {
        let env_credentials = std::env::var_os(CREDENTIALS_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::with_discovery_paths(config, env_credentials, well_known_file())
    }

    /// Create a provider with explicit discovery paths
    pub fn with_discovery_paths(
        config: &FileAuthConfig,
        env_credentials: Option<PathBuf>,
        well_known: Option<PathBuf>,
    ) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.token_timeout_secs))
            .build()
            .map_err(|e| AuthError::RequestFailed(format!("failed to build client: {}", e)))?;
        Ok(Self {
            client,
            config: config.clone(),
            env_credentials,
            well_known,
        })
    }

    /// Resolve the credential source, first match wins
    pub fn discover(&self) -> CredentialSource {
        if let Some(path) = &self.config.credentials_file {
            return CredentialSource::File(path.clone());
        }
        if let Some(path) = &self.env_credentials {
            return CredentialSource::File(path.clone());
        }
        match &self.well_known {
            Some(path) if path.is_file() => CredentialSource::File(path.clone()),
            _ => CredentialSource::MetadataServer,
        }
    }

    async fn refresh_from_file(&self, path: &Path) -> Result<Credential, AuthError> {
        match CredentialsFile::read(path)? {
            CredentialsFile::AuthorizedUser(user) => {
                debug!(
                    scope = %self.config.scope,
                    "User credentials carry the scopes granted at login"
                );
                let token =
                    refresh_authorized_user(&self.client, &self.config.token_uri, &user).await?;
                token.into_credential(&self.config.quota_project)
            }
            CredentialsFile::Unsupported(kind) => Err(AuthError::UnsupportedCredentialType(kind)),
        }
    }

    async fn refresh_from_metadata(&self) -> Result<Credential, AuthError> {
        let token = fetch_metadata_token(
            &self.client,
            &self.config.metadata_host,
            &self.config.scope,
        )
        .await
        .map_err(|e| match e {
            AuthError::NoCredentials { tried } => AuthError::NoCredentials {
                tried: format!(
                    "auth.credentials_file, {}, gcloud application default credentials, {}",
                    CREDENTIALS_ENV, tried
                ),
            },
            other => other,
        })?;
        token.into_credential(&self.config.quota_project)
    }
}

#[async_trait]
impl CredentialProvider for AmbientCredentialProvider {
    async fn refresh(&self) -> Result<Credential, AuthError> {
        let source = self.discover();
        info!(?source, "Refreshing ambient credentials");
        match source {
            CredentialSource::File(path) => self.refresh_from_file(&path).await,
            CredentialSource::MetadataServer => self.refresh_from_metadata().await,
        }
    }
}

/// gcloud's application default credentials file
fn well_known_file() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(GCLOUD_CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir).join(WELL_KNOWN_FILE));
    }
    gcloud_config_dir().map(|dir| dir.join(WELL_KNOWN_FILE))
}

#[cfg(windows)]
fn gcloud_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gcloud"))
}

#[cfg(not(windows))]
fn gcloud_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|d| d.join(".config").join("gcloud"))
}
