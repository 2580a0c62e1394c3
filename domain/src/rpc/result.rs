//! Classified outcome of a single tool call

use serde_json::Value;
use std::fmt;

/// Outcome of one `tools/call` exchange.
///
/// The three failure tiers come from different layers (network, HTTP,
/// application protocol) and are kept apart so callers can react to each.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInvocationResult {
    /// HTTP 200 with a `result` member
    Success(Value),
    /// HTTP 200 with an `error` member reported by the service
    ProtocolError { code: i64, message: String },
    /// Any HTTP status other than 200, with the raw response text
    TransportError { status: u16, body: String },
    /// Connection, TLS, timeout or body read failure
    NetworkFailure { cause: String },
}

impl ToolInvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolInvocationResult::Success(_))
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ToolInvocationResult::Success(_) => "success",
            ToolInvocationResult::ProtocolError { .. } => "protocol_error",
            ToolInvocationResult::TransportError { .. } => "transport_error",
            ToolInvocationResult::NetworkFailure { .. } => "network_failure",
        }
    }
}

impl fmt::Display for ToolInvocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolInvocationResult::Success(_) => write!(f, "Success"),
            ToolInvocationResult::ProtocolError { code, message } => {
                write!(f, "RPC error (code {}): {}", code, message)
            }
            ToolInvocationResult::TransportError { status, body } => {
                write!(f, "HTTP {}: {}", status, body)
            }
            ToolInvocationResult::NetworkFailure { cause } => {
                write!(f, "Network failure: {}", cause)
            }
        }
    }
}
