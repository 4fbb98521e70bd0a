//! Session token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access token lives in browser `localStorage` under a single key so
//! dashboard pages can attach it to later API calls. Login writes it,
//! the next login overwrites it, and nothing here clears it.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort: a browser with storage disabled still completes the
//! login redirect, it just arrives without a token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Key/value store holding the session token.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Process-local store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `window.localStorage`. No-ops outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl TokenStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("localStorage unavailable; token not saved");
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}
