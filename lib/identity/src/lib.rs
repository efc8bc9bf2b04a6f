//! Identity provider client for portcullis.
//!
//! Implements the login crate's [`Authenticator`](portcullis_login::Authenticator)
//! and [`Credential`](portcullis_login::Credential) ports over a hosted
//! identity toolkit's REST API:
//! - Password sign-in (`accounts:signInWithPassword`)
//! - Forced ID token refresh through the secure token endpoint
//!
//! Provider error codes are translated into messages fit for the login form.
//!
//! # Example
//!
//! ```
//! use portcullis_identity::{IdentityConfig, IdentityToolkitClient};
//!
//! let config = IdentityConfig::builder("public-web-api-key".to_string())
//!     .identity_endpoint("http://localhost:9099/identitytoolkit.googleapis.com/v1".to_string())
//!     .token_endpoint("http://localhost:9099/securetoken.googleapis.com/v1".to_string())
//!     .build();
//! let client = IdentityToolkitClient::new(config);
//! assert_eq!(
//!     client.config().token_endpoint(),
//!     "http://localhost:9099/securetoken.googleapis.com/v1"
//! );
//! ```

pub mod client;
pub mod config;
pub mod error;

// Re-export main types at crate root
pub use client::{IdentityToolkitClient, ProviderCredential};
pub use config::{IdentityConfig, IdentityConfigBuilder};
pub use error::IdentityError;
