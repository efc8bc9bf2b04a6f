//! Identity provider configuration.
//!
//! The API key identifies the project to the provider. It is a public value:
//! it ships to the browser along with the rest of the client settings.

use crate::error::IdentityError;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Configuration for the hosted identity provider.
///
/// Fields with defaults can be omitted when loading from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// The project's web API key.
    api_key: String,
    /// Base URL of the identity toolkit API.
    /// Default: "https://identitytoolkit.googleapis.com/v1"
    #[serde(default = "default_identity_endpoint")]
    identity_endpoint: String,
    /// Base URL of the secure token API.
    /// Default: "https://securetoken.googleapis.com/v1"
    #[serde(default = "default_token_endpoint")]
    token_endpoint: String,
}

fn default_identity_endpoint() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_token_endpoint() -> String {
    "https://securetoken.googleapis.com/v1".to_string()
}

impl IdentityConfig {
    /// Creates a configuration against the provider's public endpoints.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            identity_endpoint: default_identity_endpoint(),
            token_endpoint: default_token_endpoint(),
        }
    }

    /// Creates a configuration builder, e.g. for pointing at an emulator.
    #[must_use]
    pub fn builder(api_key: String) -> IdentityConfigBuilder {
        IdentityConfigBuilder::new(api_key)
    }

    /// Returns the web API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the identity toolkit base URL, without a trailing slash.
    #[must_use]
    pub fn identity_endpoint(&self) -> &str {
        self.identity_endpoint.trim_end_matches('/')
    }

    /// Returns the secure token base URL, without a trailing slash.
    #[must_use]
    pub fn token_endpoint(&self) -> &str {
        self.token_endpoint.trim_end_matches('/')
    }

    /// Returns the password sign-in URL, including the API key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEndpoint` if the identity endpoint is not a valid URL.
    pub fn sign_in_url(&self) -> Result<Url, IdentityError> {
        self.method_url(self.identity_endpoint(), "accounts:signInWithPassword")
    }

    /// Returns the token refresh URL, including the API key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEndpoint` if the token endpoint is not a valid URL.
    pub fn refresh_url(&self) -> Result<Url, IdentityError> {
        self.method_url(self.token_endpoint(), "token")
    }

    fn method_url(&self, base: &str, method: &str) -> Result<Url, IdentityError> {
        let raw = format!("{base}/{method}");
        Url::parse_with_params(&raw, [("key", self.api_key.as_str())]).map_err(|e| {
            IdentityError::InvalidEndpoint {
                url: raw,
                details: e.to_string(),
            }
        })
    }
}

/// Builder for `IdentityConfig`.
#[derive(Debug)]
pub struct IdentityConfigBuilder {
    api_key: String,
    identity_endpoint: String,
    token_endpoint: String,
}

impl IdentityConfigBuilder {
    /// Creates a new builder with the default endpoints.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            identity_endpoint: default_identity_endpoint(),
            token_endpoint: default_token_endpoint(),
        }
    }

    /// Sets the identity toolkit base URL.
    #[must_use]
    pub fn identity_endpoint(mut self, endpoint: String) -> Self {
        self.identity_endpoint = endpoint;
        self
    }

    /// Sets the secure token base URL.
    #[must_use]
    pub fn token_endpoint(mut self, endpoint: String) -> Self {
        self.token_endpoint = endpoint;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> IdentityConfig {
        IdentityConfig {
            api_key: self.api_key,
            identity_endpoint: self.identity_endpoint,
            token_endpoint: self.token_endpoint,
        }
    }
}
