//! Error types for the identity crate.
//!
//! Errors are designed for layered context using rootcause:
//! client operations return `Report<IdentityError>`, and the port
//! implementations reduce a report to [`IdentityError::user_message`].

use std::fmt;

/// Errors from talking to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The provider refused the request with an error code.
    Rejected {
        /// Upper-case provider code, e.g. `INVALID_PASSWORD`.
        code: String,
        /// Free-text detail following the code, if any.
        detail: Option<String>,
    },
    /// The request never produced a response.
    Transport { details: String },
    /// The response could not be understood.
    UnexpectedResponse { status: u16, details: String },
    /// A configured endpoint does not form a valid URL.
    InvalidEndpoint { url: String, details: String },
}

impl IdentityError {
    /// Parses a provider error message of the form `CODE` or `CODE : detail`.
    #[must_use]
    pub fn from_provider_message(message: &str) -> Self {
        let (code, detail) = match message.split_once(" : ") {
            Some((code, detail)) => (code.trim(), Some(detail.trim().to_string())),
            None => (message.trim(), None),
        };
        Self::Rejected {
            code: code.to_string(),
            detail,
        }
    }

    /// Returns the message to show the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { code, detail } => match known_code_message(code) {
                Some(message) => message.to_string(),
                None => detail.clone().unwrap_or_else(|| code.clone()),
            },
            Self::Transport { .. } => "Unable to reach the sign-in service.".to_string(),
            Self::UnexpectedResponse { .. } => {
                "The sign-in service returned an unexpected response.".to_string()
            }
            Self::InvalidEndpoint { .. } => "Sign-in is not configured correctly.".to_string(),
        }
    }
}

fn known_code_message(code: &str) -> Option<&'static str> {
    let message = match code {
        "EMAIL_NOT_FOUND" => "There is no user record corresponding to this email.",
        "INVALID_PASSWORD" => "The password is invalid.",
        "INVALID_LOGIN_CREDENTIALS" => "The email or password is incorrect.",
        "INVALID_EMAIL" => "The email address is badly formatted.",
        "MISSING_PASSWORD" => "A password is required.",
        "USER_DISABLED" => "This account has been disabled.",
        "USER_NOT_FOUND" => "This account no longer exists.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many unsuccessful sign-in attempts. Please try again later."
        }
        "OPERATION_NOT_ALLOWED" => "Password sign-in is disabled for this application.",
        "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" => {
            "Your sign-in has expired. Please sign in again."
        }
        _ => return None,
    };
    Some(message)
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected {
                code,
                detail: Some(detail),
            } => write!(f, "identity provider rejected request: {code} ({detail})"),
            Self::Rejected { code, detail: None } => {
                write!(f, "identity provider rejected request: {code}")
            }
            Self::Transport { details } => {
                write!(f, "identity provider unreachable: {details}")
            }
            Self::UnexpectedResponse { status, details } => {
                write!(
                    f,
                    "unexpected identity provider response (HTTP {status}): {details}"
                )
            }
            Self::InvalidEndpoint { url, details } => {
                write!(f, "invalid identity provider endpoint {url}: {details}")
            }
        }
    }
}

impl std::error::Error for IdentityError {}
