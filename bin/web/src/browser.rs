//! Browser implementations of the login ports.
//!
//! `localStorage` only exists after hydration. Server-side renders get a
//! store that reports itself unavailable; the login flow only touches
//! storage from effects and event handlers, which never run on the server.

use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portcullis_login::{Navigator, SessionToken, StorageError, TokenStore};

/// [`TokenStore`] over the browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
impl LocalStorageTokenStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            reason: "no window".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable {
                reason: js_reason(&e),
            })?
            .ok_or_else(|| StorageError::Unavailable {
                reason: "localStorage is disabled".to_string(),
            })
    }
}

#[cfg(feature = "hydrate")]
fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(feature = "hydrate")]
impl TokenStore for LocalStorageTokenStore {
    fn get(&self, key: &str) -> Result<Option<SessionToken>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map(|value| value.map(SessionToken::new))
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                reason: js_reason(&e),
            })
    }

    fn set(&self, key: &str, token: &SessionToken) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, token.as_str())
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: js_reason(&e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::RemoveFailed {
                key: key.to_string(),
                reason: js_reason(&e),
            })
    }
}

#[cfg(not(feature = "hydrate"))]
impl LocalStorageTokenStore {
    fn unavailable() -> StorageError {
        StorageError::Unavailable {
            reason: "localStorage only exists in the browser".to_string(),
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl TokenStore for LocalStorageTokenStore {
    fn get(&self, _key: &str) -> Result<Option<SessionToken>, StorageError> {
        Err(Self::unavailable())
    }

    fn set(&self, _key: &str, _token: &SessionToken) -> Result<(), StorageError> {
        Err(Self::unavailable())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(Self::unavailable())
    }
}

/// [`Navigator`] over the Leptos router.
pub struct RouterNavigator {
    navigate: Box<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Captures the router's navigate function.
    ///
    /// Must be called from a component rendered inside `<Router>`.
    #[must_use]
    pub fn from_context() -> Self {
        Self {
            navigate: Box::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}
