//! The login submit sequence.
//!
//! A submit runs sign-in, forced token refresh, token write, then navigation
//! home. The token is only written once both provider calls have succeeded,
//! so a failed attempt never leaves a partial session behind.

use crate::config::LoginConfig;
use crate::credentials::Credentials;
use crate::error::{AuthenticationFailure, MissingField};
use crate::port::{Authenticator, Navigator, TokenStore};
use crate::routes;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The token was stored and navigation to `redirect` was issued.
    SignedIn { redirect: &'static str },
    /// Sign-in, token refresh, or token storage failed.
    Failed(AuthenticationFailure),
    /// A required field was empty; nothing was dispatched.
    Incomplete(MissingField),
    /// Another submit is still awaiting the provider; nothing was dispatched.
    AlreadyPending,
}

/// Drives the login form against injected ports.
pub struct LoginFlow {
    authenticator: Rc<dyn Authenticator>,
    store: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    config: LoginConfig,
    pending: Cell<bool>,
}

impl LoginFlow {
    /// Creates a flow over the given ports.
    #[must_use]
    pub fn new(
        authenticator: Rc<dyn Authenticator>,
        store: Rc<dyn TokenStore>,
        navigator: Rc<dyn Navigator>,
        config: LoginConfig,
    ) -> Self {
        Self {
            authenticator,
            store,
            navigator,
            config,
            pending: Cell::new(false),
        }
    }

    /// Returns the flow's configuration.
    #[must_use]
    pub fn config(&self) -> &LoginConfig {
        &self.config
    }

    /// Returns true while a submit is awaiting the provider.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Drops whatever session token is stored.
    ///
    /// Called when the form mounts: reaching the login screen counts as
    /// logging out. A storage failure is logged and otherwise ignored.
    pub fn clear_stale_session(&self) {
        clear_session(self.store.as_ref(), self.config.token_key());
    }

    /// Runs one submit attempt.
    ///
    /// Never returns an error: every failure is folded into the outcome so
    /// the form can show it inline.
    pub async fn submit(&self, credentials: Credentials) -> SubmitOutcome {
        if let Err(missing) = credentials.ensure_complete() {
            debug!(field = missing.as_str(), "Login submit blocked by empty field");
            return SubmitOutcome::Incomplete(missing);
        }

        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            debug!("Login submit ignored while another is in flight");
            return SubmitOutcome::AlreadyPending;
        };

        debug!(email = %credentials.email(), "Dispatching sign-in");
        match self.sign_in(&credentials).await {
            Ok(()) => {
                self.navigator.navigate(routes::HOME);
                SubmitOutcome::SignedIn {
                    redirect: routes::HOME,
                }
            }
            Err(failure) => {
                warn!(
                    email = %credentials.email(),
                    error = %failure,
                    "Sign-in failed"
                );
                SubmitOutcome::Failed(failure)
            }
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthenticationFailure> {
        let credential = self
            .authenticator
            .sign_in(credentials.email(), credentials.password())
            .await?;
        let token = credential.fresh_token().await?;
        self.store.set(self.config.token_key(), &token)?;

        info!(email = %credentials.email(), "User signed in");
        Ok(())
    }
}

/// Removes the session token stored under `key`.
///
/// For screens that must end the session before a [`LoginFlow`] can be
/// built. A storage failure is logged and otherwise ignored.
pub fn clear_session(store: &dyn TokenStore, key: &str) {
    match store.remove(key) {
        Ok(()) => debug!(key, "Cleared stored session token"),
        Err(e) => warn!(key, error = %e, "Failed to clear stored session token"),
    }
}

/// Holds the in-flight flag for the lifetime of one submit.
///
/// Releasing on drop keeps an abandoned submit future from wedging the form.
struct PendingGuard<'a>(&'a Cell<bool>);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
