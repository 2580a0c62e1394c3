//! Ambient identity adapter
//!
//! Implements [`CredentialProvider`](stitch_application::CredentialProvider)
//! on top of Application Default Credentials.
//!
//! # Discovery order
//!
//! | source | when |
//! |--------|------|
//! | `auth.credentials_file` | set in configuration |
//! | `GOOGLE_APPLICATION_CREDENTIALS` | variable is set |
//! | gcloud well-known file | file exists |
//! | metadata server | nothing above matched |
//!
//! Only `authorized_user` credential files are refreshed; other kinds are
//! rejected with a descriptive error.

mod ambient;
mod credentials_file;
mod token;

pub use ambient::{AmbientCredentialProvider, CredentialSource};
