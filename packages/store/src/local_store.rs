//! # Browser `localStorage` store — web persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web platform**.
//! It reads and writes the page's `window.localStorage` through [`web_sys::Storage`],
//! so accounts, contacts and the login flag survive reloads of the tab.
//!
//! ## Key scoping
//!
//! With a namespace every key is stored as `"<namespace>:<key>"`, which lets several
//! deployments share one origin without trampling each other. Without one the bare
//! keys (`users`, `loggedIn`, ...) are used, matching data written by earlier builds.
//!
//! ## Connection management
//!
//! `LocalStore` only holds its prefix. The `Storage` handle is looked up on each call,
//! which is cheap and keeps the type `Clone` and free of JS handles.
//!
//! ## Error handling
//!
//! `localStorage` can be disabled (private browsing) or full. Reads then behave like
//! missing keys and writes are dropped with a `warn` entry; the UI keeps working with
//! whatever is in memory.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    prefix: Option<String>,
}

impl LocalStore {
    /// Create an unscoped store using bare keys.
    pub fn new() -> Self {
        Self::with_namespace(None)
    }

    /// Create a store whose keys are prefixed with `namespace`.
    pub fn with_namespace(namespace: Option<&str>) -> Self {
        Self {
            prefix: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
        }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn scoped_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(ns) => format!("{ns}:{key}"),
            None => key.to_string(),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(&self.scoped_key(key)).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!(key, "localStorage unavailable, dropping write");
            return;
        };
        if let Err(e) = storage.set_item(&self.scoped_key(key), value) {
            tracing::warn!(key, error = ?e, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(&self.scoped_key(key));
        }
    }
}
