//! Credential value object

use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// A bearer token bound to a quota project (Value Object)
///
/// Created once per process by a credential provider and refreshed right
/// before the transport call. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    expires_at: Option<DateTime<Utc>>,
    quota_project: String,
}

impl Credential {
    pub fn new(token: impl Into<String>, quota_project: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
            quota_project: quota_project.into(),
        }
    }

    /// Set an absolute expiry
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Set the expiry relative to `now`, as reported by token endpoints.
    ///
    /// Returns `None` when `now + seconds` is not a representable instant.
    pub fn with_expires_in(self, seconds: i64, now: DateTime<Utc>) -> Option<Self> {
        let expires_at = TimeDelta::try_seconds(seconds).and_then(|d| now.checked_add_signed(d))?;
        Some(self.with_expires_at(expires_at))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn quota_project(&self) -> &str {
        &self.quota_project
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// A credential without a known expiry is treated as valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .field("quota_project", &self.quota_project)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_without_expiry_is_valid() {
        let credential = Credential::new("ya29.token", "quota-project");
        assert!(!credential.is_expired_at(Utc::now()));
        assert_eq!(credential.token(), "ya29.token");
        assert_eq!(credential.quota_project(), "quota-project");
    }

    #[test]
    fn test_expires_in_is_relative_to_now() {
        let now = Utc::now();
        let credential = Credential::new("t", "q").with_expires_in(3599, now).unwrap();
        assert_eq!(credential.expires_at(), Some(now + TimeDelta::seconds(3599)));
        assert!(!credential.is_expired_at(now));
        assert!(credential.is_expired_at(now + TimeDelta::seconds(3600)));
    }

    #[test]
    fn test_expires_in_out_of_range_is_none() {
        let now = Utc::now();
        assert!(Credential::new("t", "q").with_expires_in(i64::MAX, now).is_none());
        assert!(Credential::new("t", "q").with_expires_in(i64::MIN, now).is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = Credential::new("secret-token", "q");
        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
