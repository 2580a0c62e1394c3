//! Credentials and the request headers derived from them.

pub mod credential;
pub mod headers;
