//! Login configuration.

use serde::{Deserialize, Serialize};

/// Settings for the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Storage key the session token is kept under.
    /// Default: "token"
    #[serde(default = "default_token_key")]
    token_key: String,
}

fn default_token_key() -> String {
    "token".to_string()
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl LoginConfig {
    /// Creates a configuration storing the token under `token_key`.
    #[must_use]
    pub fn new(token_key: impl Into<String>) -> Self {
        Self {
            token_key: token_key.into(),
        }
    }

    /// Returns the storage key for the session token.
    #[must_use]
    pub fn token_key(&self) -> &str {
        &self.token_key
    }
}
