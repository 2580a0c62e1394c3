//! Domain layer for stitch-invoke
//!
//! This crate contains the value types of the tool invocation pipeline.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Credential**: a refreshed bearer token bound to a quota project
//! - **ToolInvocationRequest**: a JSON-RPC 2.0 `tools/call` request
//! - **ToolInvocationResult**: the classified outcome of one call
//! - **CommandSpec**: the static table of CLI commands and the tools they call

pub mod auth;
pub mod command;
pub mod core;
pub mod rpc;

// Re-export commonly used types
pub use auth::{
    credential::Credential,
    headers::{AuthHeaders, QUOTA_PROJECT_HEADER},
};
pub use command::spec::{COMMANDS, CommandSpec};
pub use core::error::DomainError;
pub use rpc::{
    classify::{PARSE_ERROR_CODE, classify_response},
    request::{JSONRPC_VERSION, REQUEST_ID, TOOLS_CALL_METHOD, ToolCallParams, ToolInvocationRequest},
    result::ToolInvocationResult,
};
