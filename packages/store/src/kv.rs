//! # Key-value store — the persistence seam for accounts and contacts
//!
//! Everything the contact manager remembers between page loads lives in a flat,
//! string-keyed store of string values. [`KeyValueStore`] is the synchronous
//! interface over that medium, so the same services run against the browser's
//! `localStorage` ([`crate::LocalStore`]), a directory on disk
//! ([`crate::FileStore`]), or plain memory ([`crate::MemoryStore`]).
//!
//! ## Persisted keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`keys::USERS`] | JSON array of user records |
//! | [`keys::LOGGED_IN`] | `"true"` or `"false"` |
//! | [`keys::CURRENT_USER`] | JSON user record, absent when nobody is selected |
//! | [`keys::CURRENT_CONTACT`] | JSON contact record staged for editing |
//!
//! ## Failure model
//!
//! Implementations never return errors. A write that cannot reach the medium is
//! logged and dropped; a read that fails looks exactly like a missing key. The
//! JSON helpers follow the same rule: a value that does not parse is reported at
//! `warn` level and treated as absent, so corrupt state degrades to an empty
//! directory instead of a crash.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Well-known keys written by the contact manager.
pub mod keys {
    pub const USERS: &str = "users";
    pub const LOGGED_IN: &str = "loggedIn";
    pub const CURRENT_USER: &str = "currentUser";
    pub const CURRENT_CONTACT: &str = "currentContact";
}

/// Synchronous string-keyed store of string values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Read and decode a JSON value. Missing and malformed values both yield `None`.
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unparseable stored value");
            None
        }
    }
}

/// Read a JSON array, decoding each element on its own.
///
/// Elements that do not decode are skipped with a warning so one damaged record
/// cannot hide the rest. `None` when the key is missing or does not hold an array.
pub fn read_json_records<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Option<Vec<T>> {
    let raw: Vec<serde_json::Value> = read_json(store, key)?;
    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(key, index, error = %e, "skipping unparseable stored record");
                None
            }
        })
        .collect();
    if records.len() < total {
        tracing::warn!(key, kept = records.len(), total, "some stored records were skipped");
    }
    Some(records)
}

/// Encode a value as JSON and store it under `key`.
pub fn write_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => tracing::warn!(key, error = %e, "failed to encode value"),
    }
}

/// Remove a key, logging for traceability.
pub fn remove_key(store: &impl KeyValueStore, key: &str) {
    tracing::debug!(key, "removing stored value");
    store.remove(key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_read_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(read_json::<Vec<String>>(&store, keys::USERS), None);
    }

    #[test]
    fn test_read_corrupt_value_is_none() {
        let store = MemoryStore::new();
        store.set(keys::USERS, "{not json");
        assert_eq!(read_json::<Vec<String>>(&store, keys::USERS), None);

        // JSON.stringify(undefined) leaves this behind in browsers
        store.set(keys::CURRENT_USER, "undefined");
        assert_eq!(read_json::<String>(&store, keys::CURRENT_USER), None);
    }

    #[test]
    fn test_read_records_skips_bad_elements() {
        let store = MemoryStore::new();
        store.set("list", r#"["a", 5, "b", {"x": 1}]"#);
        assert_eq!(
            read_json_records::<String>(&store, "list"),
            Some(vec!["a".to_string(), "b".to_string()])
        );

        store.set("list", r#"{"not": "an array"}"#);
        assert_eq!(read_json_records::<String>(&store, "list"), None);
        assert_eq!(read_json_records::<String>(&store, "missing"), None);
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        write_json(&store, "list", &vec!["a".to_string(), "b".to_string()]);
        assert_eq!(store.get("list").as_deref(), Some(r#"["a","b"]"#));
        assert_eq!(
            read_json::<Vec<String>>(&store, "list"),
            Some(vec!["a".to_string(), "b".to_string()])
        );

        remove_key(&store, "list");
        assert!(store.get("list").is_none());
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.set(keys::LOGGED_IN, "true");
        assert_eq!(store.get(keys::LOGGED_IN).as_deref(), Some("true"));
    }
}
