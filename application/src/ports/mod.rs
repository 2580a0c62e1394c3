//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod credential_provider;
pub mod progress;
pub mod tool_transport;
