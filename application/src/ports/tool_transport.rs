//! Tool transport port

use async_trait::async_trait;
use stitch_domain::{AuthHeaders, ToolInvocationRequest, ToolInvocationResult};

/// Sends one `tools/call` request and classifies the outcome
///
/// Failures are reported through [`ToolInvocationResult`] variants rather
/// than an error type. No retries.
#[async_trait]
pub trait ToolTransport: Send + Sync {
    async fn send(
        &self,
        request: &ToolInvocationRequest,
        headers: &AuthHeaders,
    ) -> ToolInvocationResult;
}
