//! Ports the login flow depends on.
//!
//! Each trait stands in for one outside collaborator so the flow can be
//! driven by browser adapters in production and by fakes in tests. The async
//! ports are `?Send`: browser futures are not `Send`, and the flow only ever
//! runs on the UI thread.

use crate::credentials::SessionToken;
use crate::error::{AuthenticationFailure, StorageError};
use async_trait::async_trait;

/// Signs users in against an identity provider.
#[async_trait(?Send)]
pub trait Authenticator {
    /// Verifies an email and password with the provider.
    ///
    /// # Errors
    ///
    /// Returns a failure with a user-facing message on invalid credentials,
    /// network trouble, or a provider-side error.
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Box<dyn Credential>, AuthenticationFailure>;
}

/// A signed-in user as the identity provider represents them.
#[async_trait(?Send)]
pub trait Credential {
    /// Asks the provider to re-issue a token rather than reading a cached one.
    ///
    /// # Errors
    ///
    /// Returns a failure with a user-facing message if the provider refuses.
    async fn fresh_token(&self) -> Result<SessionToken, AuthenticationFailure>;
}

/// Client-side key-value storage for the session token.
pub trait TokenStore {
    /// Reads the token stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<SessionToken>, StorageError>;

    /// Stores `token` under `key`, replacing any previous value.
    fn set(&self, key: &str, token: &SessionToken) -> Result<(), StorageError>;

    /// Removes the token stored under `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Client-side route transitions.
pub trait Navigator {
    /// Navigates to `path`.
    fn navigate(&self, path: &str);
}
