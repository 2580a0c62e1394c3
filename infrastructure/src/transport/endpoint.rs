//! Endpoint URL policy

use super::http::TransportBuildError;
use reqwest::Url;
use std::net::IpAddr;

/// Parse and check the service endpoint.
///
/// `https` is always accepted. `http` needs `allow_http` and a loopback host.
pub(crate) fn validate_endpoint(endpoint: &str, allow_http: bool) -> Result<Url, TransportBuildError> {
    let url = Url::parse(endpoint).map_err(|e| TransportBuildError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "https" => Ok(url),
        "http" if allow_http && is_loopback(&url) => Ok(url),
        "http" if allow_http => Err(TransportBuildError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: "plain http is only allowed for loopback hosts".to_string(),
        }),
        "http" => Err(TransportBuildError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: "https is required (set service.allow_http for loopback testing)".to_string(),
        }),
        other => Err(TransportBuildError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}
