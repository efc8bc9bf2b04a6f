//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.
//!
//! Nested keys use `__` as the separator, e.g. `IDENTITY__API_KEY` or
//! `LOGIN__TOKEN_KEY`. See [`IdentityConfig`] for the identity provider
//! settings.

use crate::settings::ClientSettings;
use portcullis_identity::IdentityConfig;
use portcullis_login::LoginConfig;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Identity provider configuration.
    pub identity: IdentityConfig,

    /// Login flow configuration.
    #[serde(default)]
    pub login: LoginConfig,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the subset of configuration the browser needs.
    #[must_use]
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            identity: self.identity.clone(),
            login: self.login.clone(),
        }
    }
}
