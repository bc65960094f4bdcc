//! The persisted "logged in" flag.

use std::cell::Cell;

use store::{keys, KeyValueStore};

use crate::guard::{AppRoute, Navigator};

/// Tracks whether somebody is logged in, mirrored to the `loggedIn` key.
///
/// The flag is read once at construction and re-read by [`is_logged_in`](Self::is_logged_in),
/// so another tab logging out is noticed on the next check.
#[derive(Debug)]
pub struct AuthState<S: KeyValueStore> {
    store: S,
    logged_in: Cell<bool>,
}

impl<S: KeyValueStore> AuthState<S> {
    pub fn new(store: S) -> Self {
        let logged_in = read_flag(&store);
        Self {
            store,
            logged_in: Cell::new(logged_in),
        }
    }

    /// Re-read the flag from the store and return it.
    pub fn is_logged_in(&self) -> bool {
        let logged_in = read_flag(&self.store);
        self.logged_in.set(logged_in);
        logged_in
    }

    pub fn log_in(&self) {
        tracing::debug!("auth flag set");
        self.logged_in.set(true);
        self.store.set(keys::LOGGED_IN, "true");
    }

    pub fn log_out(&self) {
        tracing::debug!("auth flag cleared");
        self.logged_in.set(false);
        self.store.set(keys::LOGGED_IN, "false");
    }

    /// Send the user to the sign-in screen unless the last known flag is set.
    pub fn require_login(&self, nav: &impl Navigator) {
        if !self.logged_in.get() {
            nav.navigate(AppRoute::SignIn);
        }
    }
}

fn read_flag(store: &impl KeyValueStore) -> bool {
    store.get(keys::LOGGED_IN).as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::tests::RecordingNavigator;
    use store::MemoryStore;

    #[test]
    fn test_defaults_to_logged_out() {
        let auth = AuthState::new(MemoryStore::new());
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn test_log_in_until_log_out() {
        let store = MemoryStore::new();
        let auth = AuthState::new(store.clone());

        auth.log_in();
        assert!(auth.is_logged_in());
        assert!(auth.is_logged_in());
        assert_eq!(store.get(keys::LOGGED_IN).as_deref(), Some("true"));

        auth.log_out();
        assert!(!auth.is_logged_in());
        assert_eq!(store.get(keys::LOGGED_IN).as_deref(), Some("false"));
    }

    #[test]
    fn test_flag_survives_reload() {
        let store = MemoryStore::new();
        AuthState::new(store.clone()).log_in();

        let reloaded = AuthState::new(store);
        assert!(reloaded.is_logged_in());
    }

    #[test]
    fn test_is_logged_in_rereads_store() {
        let store = MemoryStore::new();
        let auth = AuthState::new(store.clone());
        auth.log_in();

        // Another tab logs out
        store.set(keys::LOGGED_IN, "false");
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn test_garbage_flag_is_logged_out() {
        let store = MemoryStore::new();
        store.set(keys::LOGGED_IN, "yes");
        assert!(!AuthState::new(store).is_logged_in());
    }

    #[test]
    fn test_require_login() {
        let auth = AuthState::new(MemoryStore::new());
        let nav = RecordingNavigator::default();

        auth.require_login(&nav);
        assert_eq!(*nav.visited.borrow(), vec![AppRoute::SignIn]);

        auth.log_in();
        auth.require_login(&nav);
        assert_eq!(nav.visited.borrow().len(), 1);
    }
}
