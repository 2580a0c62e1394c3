//! reqwest-based tool transport

use super::endpoint::validate_endpoint;
use crate::config::FileServiceConfig;
use async_trait::async_trait;
use reqwest::{Certificate, Client, Url};
use stitch_application::ToolTransport;
use stitch_domain::{AuthHeaders, ToolInvocationRequest, ToolInvocationResult, classify_response};
use std::error::Error as _;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while building the transport, before any network activity
#[derive(Error, Debug)]
pub enum TransportBuildError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to load CA bundle {path}: {reason}")]
    CaBundle { path: PathBuf, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// HTTPS transport with certificate verification and a whole-request timeout
pub struct HttpToolTransport {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpToolTransport {
    pub fn from_config(config: &FileServiceConfig) -> Result<Self, TransportBuildError> {
        let endpoint = validate_endpoint(&config.endpoint, config.allow_http)?;
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut builder = Client::builder().use_rustls_tls().timeout(timeout);
        if let Some(path) = &config.ca_bundle {
            for cert in load_ca_bundle(path)? {
                builder = builder.add_root_certificate(cert);
            }
        }
        let client = builder
            .build()
            .map_err(|e| TransportBuildError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn describe(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            return format!("request timed out after {}s", self.timeout.as_secs());
        }
        let mut cause = error.to_string();
        let mut source = error.source();
        while let Some(inner) = source {
            cause.push_str(": ");
            cause.push_str(&inner.to_string());
            source = inner.source();
        }
        cause
    }
}

#[async_trait]
impl ToolTransport for HttpToolTransport {
    async fn send(
        &self,
        request: &ToolInvocationRequest,
        headers: &AuthHeaders,
    ) -> ToolInvocationResult {
        debug!(endpoint = %self.endpoint, tool = request.tool_name(), "POST tools/call");

        let mut builder = self.client.post(self.endpoint.clone());
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }

        let response = match builder.json(request).send().await {
            Ok(r) => r,
            Err(e) => {
                let cause = self.describe(&e);
                warn!("Request to {} failed: {}", self.endpoint, cause);
                return ToolInvocationResult::NetworkFailure { cause };
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                return ToolInvocationResult::NetworkFailure {
                    cause: format!("failed to read response body: {}", self.describe(&e)),
                };
            }
        };
        debug!(status, bytes = body.len(), "Received response");

        classify_response(status, &body)
    }
}

fn load_ca_bundle(path: &Path) -> Result<Vec<Certificate>, TransportBuildError> {
    let pem = std::fs::read(path).map_err(|e| TransportBuildError::CaBundle {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let certs = Certificate::from_pem_bundle(&pem).map_err(|e| TransportBuildError::CaBundle {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if certs.is_empty() {
        return Err(TransportBuildError::CaBundle {
            path: path.to_path_buf(),
            reason: "no certificates found".to_string(),
        });
    }
    Ok(certs)
}
