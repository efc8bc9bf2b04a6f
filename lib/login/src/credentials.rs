//! Credentials entered into the login form and the token a sign-in yields.

use crate::error::MissingField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An email and password pair, as typed by the user.
///
/// Credentials live only for the duration of one submit.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from the current field values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Checks that both fields are filled in.
    ///
    /// Mirrors the HTML `required` constraint: only the empty string is
    /// missing, whitespace counts as a value.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, email before password.
    pub fn ensure_complete(&self) -> Result<(), MissingField> {
        if self.email.is_empty() {
            return Err(MissingField::Email);
        }
        if self.password.is_empty() {
            return Err(MissingField::Password);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque token proving an authenticated session.
///
/// Issued by the identity provider and persisted client-side so the rest of
/// the application can present it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token, returning the raw string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(<{} bytes>)", self.0.len())
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_credentials_pass() {
        let creds = Credentials::new("user@example.com", "correctpw");
        assert_eq!(creds.ensure_complete(), Ok(()));
        assert_eq!(creds.email(), "user@example.com");
        assert_eq!(creds.password(), "correctpw");
    }

    #[test]
    fn empty_email_is_missing() {
        let creds = Credentials::new("", "correctpw");
        assert_eq!(creds.ensure_complete(), Err(MissingField::Email));
    }

    #[test]
    fn empty_password_is_missing() {
        let creds = Credentials::new("user@example.com", "");
        assert_eq!(creds.ensure_complete(), Err(MissingField::Password));
    }

    #[test]
    fn email_reported_before_password() {
        let creds = Credentials::new("", "");
        assert_eq!(creds.ensure_complete(), Err(MissingField::Email));
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        let creds = Credentials::new(" ", " ");
        assert_eq!(creds.ensure_complete(), Ok(()));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials::new("user@example.com", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn session_token_debug_hides_value() {
        let token = SessionToken::from("eyJhbGciOiJSUzI1NiJ9.secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("27 bytes"));
    }

    #[test]
    fn session_token_serializes_as_plain_string() {
        let token = SessionToken::from("abc");
        let json = serde_json::to_string(&token).expect("serialize");
        assert_eq!(json, "\"abc\"");
        let parsed: SessionToken = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.as_str(), "abc");
    }
}
