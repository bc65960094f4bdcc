//! Session context: one [`UserDirectory`] per tab, shared through a signal.
//!
//! The backing store is picked per platform:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Desktop / native**: files under `<data_dir>/contacts/` via [`store::FileStore`]

use contacts::UserDirectory;
use dioxus::prelude::*;
use store::ContactsConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStore = store::FileStore;

/// The session service held in context.
pub type Session = Signal<UserDirectory<AppStore>>;

/// Create the platform-appropriate store, scoped to the configured namespace.
pub fn make_store(config: &ContactsConfig) -> AppStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::with_namespace(config.namespace())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("contacts");
        store::FileStore::with_namespace(&base, config.namespace())
    }
}

/// Get the session service.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that loads the directory once and shares it with every view.
#[component]
pub fn SessionProvider(config: ContactsConfig, children: Element) -> Element {
    use_context_provider(|| {
        let directory = UserDirectory::with_config(make_store(&config), config.signup.clone());
        tracing::info!(logged_in = directory.is_logged_in(), "session loaded");
        Signal::new(directory)
    });

    rsx! {
        {children}
    }
}
