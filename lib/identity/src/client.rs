//! REST client for the hosted identity toolkit.

use crate::config::IdentityConfig;
use crate::error::IdentityError;
use async_trait::async_trait;
use reqwest::Url;
use portcullis_login::{AuthenticationFailure, Authenticator, Credential, SessionToken};
use rootcause::prelude::Report;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use tracing::{debug, instrument, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    refresh_token: String,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'static str,
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for password sign-in and token refresh.
#[derive(Debug, Clone)]
pub struct IdentityToolkitClient {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl IdentityToolkitClient {
    /// Creates a client with a default HTTP client.
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Creates a client sharing an existing HTTP client.
    #[must_use]
    pub fn with_http_client(config: IdentityConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Returns the client's configuration.
    #[must_use]
    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    /// Signs a user in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for provider refusals (bad password, unknown email,
    /// disabled account), `Transport` if the provider is unreachable, and
    /// `UnexpectedResponse` if the reply cannot be decoded.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderCredential, Report<IdentityError>> {
        let request = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: SignInResponse = self.post(self.config.sign_in_url()?, &request).await?;
        debug!(user_id = %response.local_id, "Password sign-in accepted");

        Ok(ProviderCredential {
            client: self.clone(),
            user_id: response.local_id,
            email: response.email,
            refresh_token: RefCell::new(response.refresh_token),
        })
    }

    /// Exchanges a refresh token for a newly issued ID token.
    ///
    /// Returns the ID token and the refresh token to use next time.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` if the refresh token is expired or revoked, plus the
    /// same transport and decoding errors as sign-in.
    #[instrument(skip_all)]
    pub async fn refresh_id_token(
        &self,
        refresh_token: &str,
    ) -> Result<(SessionToken, String), Report<IdentityError>> {
        let request = RefreshRequest {
            grant_type: "refresh_token",
            refresh_token,
        };
        let response: RefreshResponse = self.post(self.config.refresh_url()?, &request).await?;
        Ok((SessionToken::new(response.id_token), response.refresh_token))
    }

    async fn post<B, T>(&self, url: Url, body: &B) -> Result<T, Report<IdentityError>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityError::Transport {
                details: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| IdentityError::Transport {
            details: e.to_string(),
        })?;

        if status.is_success() {
            let parsed =
                serde_json::from_str(&text).map_err(|e| IdentityError::UnexpectedResponse {
                    status: status.as_u16(),
                    details: e.to_string(),
                })?;
            return Ok(parsed);
        }

        let envelope: ErrorEnvelope =
            serde_json::from_str(&text).map_err(|e| IdentityError::UnexpectedResponse {
                status: status.as_u16(),
                details: e.to_string(),
            })?;
        Err(IdentityError::from_provider_message(&envelope.error.message).into())
    }
}

#[async_trait(?Send)]
impl Authenticator for IdentityToolkitClient {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Box<dyn Credential>, AuthenticationFailure> {
        match self.sign_in_with_password(email, password).await {
            Ok(credential) => Ok(Box::new(credential)),
            Err(report) => {
                warn!(error = %report, "Identity provider sign-in failed");
                Err(AuthenticationFailure::new(
                    report.current_context().user_message(),
                ))
            }
        }
    }
}

/// A user signed in through [`IdentityToolkitClient`].
///
/// Holds the provider's refresh token, replacing it whenever the provider
/// rotates it.
#[derive(Debug)]
pub struct ProviderCredential {
    client: IdentityToolkitClient,
    user_id: String,
    email: Option<String>,
    refresh_token: RefCell<String>,
}

impl ProviderCredential {
    /// Returns the provider's ID for the user.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the email the provider has on record, if it returned one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Requests a newly issued ID token, bypassing any cached one.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider refuses the refresh.
    pub async fn refresh(&self) -> Result<SessionToken, Report<IdentityError>> {
        let current = self.refresh_token.borrow().clone();
        let (token, next_refresh) = self.client.refresh_id_token(&current).await?;
        self.refresh_token.replace(next_refresh);
        Ok(token)
    }
}

#[async_trait(?Send)]
impl Credential for ProviderCredential {
    async fn fresh_token(&self) -> Result<SessionToken, AuthenticationFailure> {
        self.refresh().await.map_err(|report| {
            warn!(user_id = %self.user_id, error = %report, "ID token refresh failed");
            AuthenticationFailure::new(report.current_context().user_message())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> IdentityToolkitClient {
        let config = IdentityConfig::builder("test-key".to_string())
            .identity_endpoint(server.uri())
            .token_endpoint(server.uri())
            .build();
        IdentityToolkitClient::new(config)
    }

    fn json_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json")
    }

    async fn mount_sign_in(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .and(query_param("key", "test-key"))
            .and(body_json(json!({
                "email": "user@example.com",
                "password": "correctpw",
                "returnSecureToken": true
            })))
            .respond_with(json_response(
                200,
                json!({
                    "kind": "identitytoolkit#VerifyPasswordResponse",
                    "localId": "uid-123",
                    "email": "user@example.com",
                    "idToken": "cached-id-token",
                    "refreshToken": "refresh-1",
                    "expiresIn": "3600",
                    "registered": true
                }),
            ))
            .expect(1)
            .mount(server)
            .await;
    }

    fn refresh_body(id_token: &str, refresh_token: &str) -> serde_json::Value {
        json!({
            "access_token": id_token,
            "expires_in": "3600",
            "token_type": "Bearer",
            "refresh_token": refresh_token,
            "id_token": id_token,
            "user_id": "uid-123",
            "project_id": "1234"
        })
    }

    #[tokio::test]
    async fn sign_in_sends_password_request() {
        let server = MockServer::start().await;
        mount_sign_in(&server).await;

        let credential = client_for(&server)
            .sign_in_with_password("user@example.com", "correctpw")
            .await
            .expect("sign in");

        assert_eq!(credential.user_id(), "uid-123");
        assert_eq!(credential.email(), Some("user@example.com"));
    }

    #[tokio::test]
    async fn fresh_token_always_asks_provider() {
        let server = MockServer::start().await;
        mount_sign_in(&server).await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(query_param("key", "test-key"))
            .and(body_json(json!({
                "grant_type": "refresh_token",
                "refresh_token": "refresh-1"
            })))
            .respond_with(json_response(200, refresh_body("fresh-id-token", "refresh-2")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_json(json!({
                "grant_type": "refresh_token",
                "refresh_token": "refresh-2"
            })))
            .respond_with(json_response(200, refresh_body("fresher-id-token", "refresh-3")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let credential = client
            .sign_in("user@example.com", "correctpw")
            .await
            .expect("sign in");

        let first = credential.fresh_token().await.expect("first refresh");
        let second = credential.fresh_token().await.expect("second refresh");

        assert_eq!(first.as_str(), "fresh-id-token");
        assert_eq!(second.as_str(), "fresher-id-token");
    }

    #[tokio::test]
    async fn rejected_sign_in_maps_provider_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .respond_with(json_response(
                400,
                json!({
                    "error": {
                        "code": 400,
                        "message": "INVALID_PASSWORD",
                        "errors": [{
                            "message": "INVALID_PASSWORD",
                            "domain": "global",
                            "reason": "invalid"
                        }]
                    }
                }),
            ))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = client
            .sign_in_with_password("user@example.com", "wrongpw")
            .await
            .expect_err("should be rejected");
        assert_eq!(
            report.current_context(),
            &IdentityError::Rejected {
                code: "INVALID_PASSWORD".to_string(),
                detail: None,
            }
        );

        let failure = client
            .sign_in("user@example.com", "wrongpw")
            .await
            .err()
            .expect("port should fail");
        assert_eq!(failure.message(), "The password is invalid.");
    }

    #[tokio::test]
    async fn expired_refresh_token_is_reported() {
        let server = MockServer::start().await;
        mount_sign_in(&server).await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(json_response(
                400,
                json!({
                    "error": {
                        "code": 400,
                        "message": "TOKEN_EXPIRED",
                        "status": "INVALID_ARGUMENT"
                    }
                }),
            ))
            .mount(&server)
            .await;

        let credential = client_for(&server)
            .sign_in("user@example.com", "correctpw")
            .await
            .expect("sign in");
        let failure = credential.fresh_token().await.expect_err("refresh should fail");

        assert_eq!(
            failure.message(),
            "Your sign-in has expired. Please sign in again."
        );
    }

    #[tokio::test]
    async fn garbled_error_body_is_unexpected_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = client
            .sign_in_with_password("user@example.com", "correctpw")
            .await
            .expect_err("should fail");

        assert!(matches!(
            report.current_context(),
            IdentityError::UnexpectedResponse { status: 502, .. }
        ));
    }

    #[tokio::test]
    async fn unreachable_provider_is_transport_error() {
        // Reserve a port, then free it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let config = IdentityConfig::builder("test-key".to_string())
            .identity_endpoint(format!("http://{addr}"))
            .token_endpoint(format!("http://{addr}"))
            .build();
        let failure = IdentityToolkitClient::new(config)
            .sign_in("user@example.com", "correctpw")
            .await
            .err()
            .expect("should fail");

        assert_eq!(failure.message(), "Unable to reach the sign-in service.");
    }
}
