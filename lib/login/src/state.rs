//! What the login form renders from.

use crate::flow::SubmitOutcome;

/// View model for the login form.
///
/// Holds the current error message, or none, and whether a submit is in
/// flight. The error is recomputed from each submit's outcome, never
/// accumulated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    error: Option<String>,
    pending: bool,
}

impl LoginState {
    /// Creates the initial state: no error, nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a submit as dispatched.
    pub fn begin(&mut self) {
        self.pending = true;
    }

    /// Folds a finished submit into the state.
    pub fn record(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::SignedIn { .. } => {
                self.error = None;
                self.pending = false;
            }
            SubmitOutcome::Failed(failure) => {
                self.error = Some(failure.message().to_string());
                self.pending = false;
            }
            SubmitOutcome::Incomplete(_) => {
                self.pending = false;
            }
            // The earlier submit still owns the pending flag.
            SubmitOutcome::AlreadyPending => {}
        }
    }

    /// Returns the message to show above the inputs, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true while a submit is awaiting the provider.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
