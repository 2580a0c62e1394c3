//! HTTPS transport for `tools/call` requests
//!
//! Implements [`ToolTransport`](stitch_application::ToolTransport) with
//! `reqwest` over rustls. Certificates are always verified against the
//! bundled web PKI roots, optionally extended with a configured CA bundle.

mod endpoint;
mod http;

pub use http::{HttpToolTransport, TransportBuildError};
