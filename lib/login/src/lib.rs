//! Login flow for portcullis.
//!
//! This crate provides:
//! - Credential and session token types (`Credentials`, `SessionToken`)
//! - Ports to the outside world (`Authenticator`, `Credential`, `TokenStore`, `Navigator`)
//! - The submit sequence and its in-flight guard (`LoginFlow`)
//! - The view model a form renders from (`LoginState`)
//!
//! Nothing here depends on a UI framework. The web crate wires browser
//! adapters into [`LoginFlow`] and mirrors [`LoginState`] into signals.
//!
//! # Example
//!
//! ```
//! use portcullis_login::{LoginConfig, MemoryTokenStore, SessionToken, TokenStore};
//!
//! let config = LoginConfig::default();
//! let store = MemoryTokenStore::new();
//! store
//!     .set(config.token_key(), &SessionToken::new("stale".to_string()))
//!     .expect("memory store never fails");
//! assert!(store.contains(config.token_key()));
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod flow;
pub mod memory;
pub mod port;
pub mod routes;
pub mod state;

// Re-export main types at crate root
pub use config::LoginConfig;
pub use credentials::{Credentials, SessionToken};
pub use error::{AuthenticationFailure, MissingField, StorageError};
pub use flow::{LoginFlow, SubmitOutcome, clear_session};
pub use memory::MemoryTokenStore;
pub use port::{Authenticator, Credential, Navigator, TokenStore};
pub use state::LoginState;
