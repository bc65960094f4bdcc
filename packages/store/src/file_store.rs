//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in its
//! own file. It is used by native builds so accounts and contacts survive app
//! restarts the way `localStorage` does in a browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── users              # JSON array of user records
//! ├── loggedIn           # "true" / "false"
//! ├── currentUser
//! └── currentContact
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/contacts/` on Linux.

use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Create a store under `<base>/<namespace>` when a namespace is given.
    pub fn with_namespace(base: &Path, namespace: Option<&str>) -> Self {
        match namespace {
            Some(ns) => Self::new(base.join(ns)),
            None => Self::new(base.to_path_buf()),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; strip separators so a key can never escape the base.
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!(base = %self.base.display(), error = %e, "failed to create store directory");
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!(key, error = %e, "failed to write stored value");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, error = %e, "failed to remove stored value"),
        }
    }
}
