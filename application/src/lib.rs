//! Application layer for stitch-invoke
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    credential_provider::{AuthError, CredentialProvider},
    progress::{InvocationProgress, NoInvocationProgress},
    tool_transport::ToolTransport,
};
pub use use_cases::{
    dispatch::{CommandDispatcher, PreparedCall},
    invoke_tool::{InvokeError, InvokeToolUseCase},
};
