//! Credentials file parsing

use serde::Deserialize;
use stitch_application::AuthError;
use std::path::Path;

/// User credentials produced by `gcloud auth application-default login`
#[derive(Clone, Deserialize)]
pub(crate) struct AuthorizedUser {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// A parsed credentials file
#[derive(Clone)]
pub(crate) enum CredentialsFile {
    AuthorizedUser(AuthorizedUser),
    /// Any other `type`, kept for the error message
    Unsupported(String),
}

#[derive(Deserialize)]
struct RawType {
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl CredentialsFile {
    /// Read and parse a credentials file
    pub(crate) fn read(path: &Path) -> Result<Self, AuthError> {
        let content = std::fs::read_to_string(path).map_err(|e| AuthError::CredentialFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|reason| AuthError::CredentialFile {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse credentials JSON; errors are plain reasons
    pub(crate) fn parse(content: &str) -> Result<Self, String> {
        let raw: RawType = serde_json::from_str(content).map_err(|e| e.to_string())?;
        match raw.kind.as_deref() {
            Some("authorized_user") => serde_json::from_str(content)
                .map(CredentialsFile::AuthorizedUser)
                .map_err(|e| e.to_string()),
            Some(other) => Ok(CredentialsFile::Unsupported(other.to_string())),
            None => Err("missing \"type\" field".to_string()),
        }
    }
}
