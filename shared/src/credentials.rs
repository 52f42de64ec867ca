//! Persisted admin key and auth token.

use std::{cell::RefCell, collections::HashMap};

/// Storage key of the admin API key.
pub const ADMIN_API_KEY: &str = "adminApiKey";
/// Storage key of the auth token written by the login flow.
pub const AUTH_TOKEN_KEY: &str = "gitlogsAuthToken";

/// Minimal string key/value store (browser `localStorage` in production).
pub trait KeyValueStore {
    /// Reads a value; unavailable storage reads as absent.
    fn get(&self, key: &str) -> Option<String>;
    /// Writes a value; failures are dropped.
    fn set(&self, key: &str, value: &str);
    /// Removes a value.
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store used by tests and as a fallback when storage is blocked.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Typed access to the two credential keys.
#[derive(Debug)]
pub struct CredentialStore<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    /// Wraps a backing store.
    pub fn new(store: S) -> Self {
        Self {
            store,
        }
    }

    /// Saved admin key, or `""`.
    pub fn read_admin_key(&self) -> String {
        self.store.get(ADMIN_API_KEY).unwrap_or_default()
    }

    /// Overwrites the saved admin key.
    pub fn write_admin_key(&self, key: &str) {
        self.store.set(ADMIN_API_KEY, key);
    }

    /// Auth token; blank values count as absent.
    pub fn read_auth_token(&self) -> Option<String> {
        self.store
            .get(AUTH_TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    /// Stores the auth token after a successful login.
    pub fn write_auth_token(&self, token: &str) {
        self.store.set(AUTH_TOKEN_KEY, token);
    }

    /// Forgets the auth token on logout.
    pub fn clear_auth_token(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
    }
}

/// One notification from the cross-tab storage channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    /// Changed key; `None` when the whole storage area was cleared.
    pub key: Option<String>,
}

impl StorageChange {
    /// Whether the auth token may have changed.
    pub fn touches_auth_token(&self) -> bool {
        match self.key.as_deref() {
            Some(key) => key == AUTH_TOKEN_KEY,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_key_defaults_to_empty() {
        let store = CredentialStore::new(MemoryStore::default());
        assert_eq!(store.read_admin_key(), "");
    }

    #[test]
    fn admin_key_round_trips_across_instances() {
        let backing = MemoryStore::default();
        CredentialStore::new(&backing).write_admin_key("sk-1");
        let reopened = CredentialStore::new(&backing);
        assert_eq!(reopened.read_admin_key(), "sk-1");
    }

    #[test]
    fn blank_auth_token_is_absent() {
        let store = CredentialStore::new(MemoryStore::default());
        store.write_auth_token("  ");
        assert_eq!(store.read_auth_token(), None);
        store.write_auth_token("tok");
        assert_eq!(store.read_auth_token().as_deref(), Some("tok"));
        store.clear_auth_token();
        assert_eq!(store.read_auth_token(), None);
    }

    #[test]
    fn storage_change_filter() {
        let token = StorageChange {
            key: Some(AUTH_TOKEN_KEY.to_string()),
        };
        let other = StorageChange {
            key: Some(ADMIN_API_KEY.to_string()),
        };
        let cleared = StorageChange {
            key: None,
        };
        assert!(token.touches_auth_token());
        assert!(!other.touches_auth_token());
        assert!(cleared.touches_auth_token());
    }
}
