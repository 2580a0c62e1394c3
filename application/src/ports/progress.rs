//! Progress notification port

use stitch_domain::ToolInvocationResult;

/// Callbacks around the two blocking steps of an invocation
pub trait InvocationProgress: Send + Sync {
    /// Called before credentials are refreshed
    fn on_auth_start(&self) {}

    /// Called once headers are ready and the request is about to be sent
    fn on_call_start(&self, _tool_name: &str) {}

    /// Called with the classified outcome
    fn on_call_complete(&self, _result: &ToolInvocationResult) {}
}

/// No-op progress notifier
pub struct NoInvocationProgress;

impl InvocationProgress for NoInvocationProgress {}
