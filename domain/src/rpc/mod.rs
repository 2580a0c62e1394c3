//! JSON-RPC 2.0 types for the `tools/call` exchange.
//!
//! - **Request**: [`request::ToolInvocationRequest`], always `tools/call` with id 1
//! - **Outcome**: [`result::ToolInvocationResult`], one variant per failure tier
//! - **Classification**: [`classify::classify_response`] turns an HTTP status
//!   and body into an outcome

pub mod classify;
pub mod request;
pub mod result;
