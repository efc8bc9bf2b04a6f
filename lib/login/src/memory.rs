//! In-memory token store.

use crate::credentials::SessionToken;
use crate::error::StorageError;
use crate::port::TokenStore;
use std::cell::RefCell;
use std::collections::HashMap;

/// A [`TokenStore`] backed by a map, standing in for browser storage.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RefCell<HashMap<String, SessionToken>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a token is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<SessionToken>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, token: &SessionToken) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), token.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
