//! HTTP headers attached to every authenticated call

use super::credential::Credential;
use std::collections::BTreeMap;
use std::fmt;

/// Header carrying the quota project that usage is billed against.
pub const QUOTA_PROJECT_HEADER: &str = "X-Goog-User-Project";

const AUTHORIZATION_HEADER: &str = "Authorization";
const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Header name to value mapping produced by a credential provider.
///
/// Merged verbatim into the outgoing request by the transport.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthHeaders(BTreeMap<String, String>);

impl AuthHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content type, bearer authorization and quota project headers.
    pub fn from_credential(credential: &Credential) -> Self {
        let mut headers = Self::new();
        headers.insert(CONTENT_TYPE_HEADER, "application/json");
        headers.insert(
            AUTHORIZATION_HEADER,
            format!("Bearer {}", credential.token()),
        );
        headers.insert(QUOTA_PROJECT_HEADER, credential.quota_project());
        headers
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.0 {
            if name.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
                map.entry(name, &"Bearer <redacted>");
            } else {
                map.entry(name, value);
            }
        }
        map.finish()
    }
}
