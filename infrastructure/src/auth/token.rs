//! Token endpoint exchanges

use super::credentials_file::AuthorizedUser;
use chrono::Utc;
use reqwest::{Client, Response};
use serde::Deserialize;
use stitch_application::AuthError;
use stitch_domain::Credential;
use tracing::debug;

/// OAuth2 token response (token endpoint and metadata server share the shape)
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl TokenResponse {
    /// Rejects expiries that are out of range or already in the past
    pub(crate) fn into_credential(self, quota_project: &str) -> Result<Credential, AuthError> {
        let credential = Credential::new(self.access_token, quota_project);
        let Some(seconds) = self.expires_in else {
            return Ok(credential);
        };
        let now = Utc::now();
        let credential = credential.with_expires_in(seconds, now).ok_or_else(|| {
            AuthError::InvalidTokenResponse(format!("expires_in out of range: {}", seconds))
        })?;
        if credential.is_expired_at(now) {
            return Err(AuthError::InvalidTokenResponse(format!(
                "token already expired (expires_in {})",
                seconds
            )));
        }
        Ok(credential)
    }
}

/// Exchange a user refresh token for an access token
pub(crate) async fn refresh_authorized_user(
    client: &Client,
    token_uri: &str,
    user: &AuthorizedUser,
) -> Result<TokenResponse, AuthError> {
    debug!(token_uri, "Refreshing user credentials");
    let response = client
        .post(token_uri)
        .form(&[
            ("grant_type", "refresh_token"),
            ("client_id", user.client_id.as_str()),
            ("client_secret", user.client_secret.as_str()),
            ("refresh_token", user.refresh_token.as_str()),
        ])
        .send()
        .await
        .map_err(|e| AuthError::RequestFailed(e.to_string()))?;
    read_token_response(response).await
}

/// Fetch an access token for the instance's default service account.
///
/// An unreachable metadata server means there is no ambient identity at all,
/// so connection failures map to [`AuthError::NoCredentials`].
pub(crate) async fn fetch_metadata_token(
    client: &Client,
    metadata_host: &str,
    scope: &str,
) -> Result<TokenResponse, AuthError> {
    let url = format!(
        "http://{}/computeMetadata/v1/instance/service-accounts/default/token",
        metadata_host
    );
    debug!(%url, scope, "Requesting metadata server token");
    let response = client
        .get(&url)
        .query(&[("scopes", scope)])
        .header("Metadata-Flavor", "Google")
        .send()
        .await
        .map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                AuthError::NoCredentials {
                    tried: format!("metadata server at {}", metadata_host),
                }
            } else {
                AuthError::RequestFailed(e.to_string())
            }
        })?;
    read_token_response(response).await
}

async fn read_token_response(response: Response) -> Result<TokenResponse, AuthError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

    if !status.is_success() {
        return Err(AuthError::TokenEndpoint {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| AuthError::InvalidTokenResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_with_expiry() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"ya29.a","expires_in":3599,"token_type":"Bearer"}"#)
                .unwrap();
        let credential = response.into_credential("quota").unwrap();
        assert_eq!(credential.token(), "ya29.a");
        assert_eq!(credential.quota_project(), "quota");
        assert!(credential.expires_at().is_some());
    }

    #[test]
    fn token_response_without_expiry() {
        let response: TokenResponse = serde_json::from_str(r#"{"access_token":"t"}"#).unwrap();
        assert!(response.into_credential("q").unwrap().expires_at().is_none());
    }

    #[test]
    fn token_response_with_oversized_expiry_is_invalid() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"t","expires_in":9223372036854775807}"#)
                .unwrap();
        assert!(matches!(
            response.into_credential("q"),
            Err(AuthError::InvalidTokenResponse(_))
        ));
    }

    #[test]
    fn token_response_already_expired_is_invalid() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"t","expires_in":0}"#).unwrap();
        assert!(matches!(
            response.into_credential("q"),
            Err(AuthError::InvalidTokenResponse(_))
        ));
    }
}
