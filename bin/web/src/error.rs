//! Domain error types for server operations.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors serving client settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The server was started without client settings attached to requests.
    Missing { details: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { details } => {
                write!(f, "client settings unavailable: {}", details)
            }
        }
    }
}

impl SettingsError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            SettingsError::Missing { .. } => ServerFnError::new("Sign-in is not configured"),
        }
    }
}
