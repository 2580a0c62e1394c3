//! Invoke Tool use case.
//!
//! Runs the authenticated pipeline for a single tool call:
//! build request → refresh credentials → send → unwrap the classified result.

use crate::ports::credential_provider::{AuthError, CredentialProvider};
use crate::ports::progress::InvocationProgress;
use crate::ports::tool_transport::ToolTransport;
use serde_json::{Map, Value};
use stitch_domain::{DomainError, ToolInvocationRequest, ToolInvocationResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced at the dispatch boundary, one variant per tier.
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Usage error: {0}")]
    Usage(#[from] DomainError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Network failure: {cause}")]
    Network { cause: String },

    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("RPC error (code {code}): {message}")]
    Protocol { code: i64, message: String },
}

impl InvokeError {
    /// Unwrap a classified result into the payload or the matching error
    pub fn from_result(result: ToolInvocationResult) -> Result<Value, InvokeError> {
        match result {
            ToolInvocationResult::Success(payload) => Ok(payload),
            ToolInvocationResult::ProtocolError { code, message } => {
                Err(InvokeError::Protocol { code, message })
            }
            ToolInvocationResult::TransportError { status, body } => {
                Err(InvokeError::Transport { status, body })
            }
            ToolInvocationResult::NetworkFailure { cause } => Err(InvokeError::Network { cause }),
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, InvokeError::Usage(_))
    }
}

/// Use case for calling one remote tool.
pub struct InvokeToolUseCase {
    credentials: Arc<dyn CredentialProvider>,
    transport: Arc<dyn ToolTransport>,
}

impl InvokeToolUseCase {
    pub fn new(credentials: Arc<dyn CredentialProvider>, transport: Arc<dyn ToolTransport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Execute the call. Credential failures abort before the transport is used.
    pub async fn execute(
        &self,
        tool_name: &str,
        arguments: Map<String, Value>,
        progress: &dyn InvocationProgress,
    ) -> Result<Value, InvokeError> {
        let request = ToolInvocationRequest::build(tool_name, arguments);
        let rendered = serde_json::to_string(request.arguments()).unwrap_or_default();
        debug!(
            tool = request.tool_name(),
            arguments = %rendered,
            "Built tools/call request"
        );

        progress.on_auth_start();
        let headers = self.credentials.acquire_headers().await?;
        debug!(headers = ?headers, "Acquired auth headers");

        info!("Calling tool {}", request.tool_name());
        progress.on_call_start(request.tool_name());
        let result = self.transport.send(&request, &headers).await;
        progress.on_call_complete(&result);

        if result.is_success() {
            info!("Tool {} succeeded", request.tool_name());
        } else {
            warn!(kind = result.kind(), "Tool {} failed: {}", request.tool_name(), result);
        }

        InvokeError::from_result(result)
    }
}
