//! Settings the browser needs to sign users in.

use leptos::prelude::*;
use portcullis_identity::IdentityConfig;
use portcullis_login::LoginConfig;
use serde::{Deserialize, Serialize};

/// Identity provider and login settings shipped to the browser.
///
/// Everything in here is public: the identity provider's web API key is
/// meant to be embedded in client code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub identity: IdentityConfig,
    pub login: LoginConfig,
}

/// Server function to fetch the client settings.
#[server]
pub async fn get_client_settings() -> Result<ClientSettings, ServerFnError> {
    use crate::error::SettingsError;
    use axum::Extension;

    let Extension(settings): Extension<ClientSettings> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "Client settings missing from request");
            SettingsError::Missing {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    Ok(settings)
}
