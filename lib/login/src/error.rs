//! Error types for the login crate.
//!
//! - `AuthenticationFailure`: the one error a user ever sees
//! - `MissingField`: a required form field was left empty
//! - `StorageError`: the client-side token store misbehaved

use std::fmt;

/// A failed sign-in, carrying the message to show the user.
///
/// The message comes verbatim from the authenticator. No distinction is made
/// between bad credentials, network trouble, or provider errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationFailure {
    message: String,
}

impl AuthenticationFailure {
    /// Creates a failure with a display message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message to display.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the failure, returning the message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for AuthenticationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AuthenticationFailure {}

impl From<StorageError> for AuthenticationFailure {
    fn from(err: StorageError) -> Self {
        Self::new(format!(
            "Signed in, but the session could not be saved: {err}"
        ))
    }
}

/// A required login field that was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// The email field.
    Email,
    /// The password field.
    Password,
}

impl MissingField {
    /// Returns the field's name as used in the form markup.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is required", self.as_str())
    }
}

impl std::error::Error for MissingField {}

/// Errors from a client-side token store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage is available (server render, disabled storage, private mode).
    Unavailable { reason: String },
    /// Reading a key failed.
    ReadFailed { key: String, reason: String },
    /// Writing a key failed (quota exceeded, security error).
    WriteFailed { key: String, reason: String },
    /// Removing a key failed.
    RemoveFailed { key: String, reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => {
                write!(f, "storage unavailable: {reason}")
            }
            Self::ReadFailed { key, reason } => {
                write!(f, "failed to read '{key}': {reason}")
            }
            Self::WriteFailed { key, reason } => {
                write!(f, "failed to write '{key}': {reason}")
            }
            Self::RemoveFailed { key, reason } => {
                write!(f, "failed to remove '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for StorageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_failure_displays_message_verbatim() {
        let err = AuthenticationFailure::new("Invalid password");
        assert_eq!(err.to_string(), "Invalid password");
        assert_eq!(err.message(), "Invalid password");
    }

    #[test]
    fn missing_field_display() {
        assert_eq!(MissingField::Email.to_string(), "email is required");
        assert_eq!(MissingField::Password.to_string(), "password is required");
    }

    #[test]
    fn storage_error_write_failed_display() {
        let err = StorageError::WriteFailed {
            key: "token".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert!(err.to_string().contains("token"));
        assert!(err.to_string().contains("QuotaExceededError"));
    }

    #[test]
    fn storage_error_becomes_authentication_failure() {
        let err: AuthenticationFailure = StorageError::Unavailable {
            reason: "no window".to_string(),
        }
        .into();
        assert!(err.message().starts_with("Signed in, but the session could not be saved"));
        assert!(err.message().contains("no window"));
    }
}
