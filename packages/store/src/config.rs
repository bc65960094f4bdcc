//! # Application configuration — `contacts.toml`
//!
//! Defines the TOML configuration bundled with a contact manager build
//! (filename: [`ContactsConfig::filename`] = `"contacts.toml"`). It is read once at
//! startup to pick the storage scope and the sign-up rules.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! namespace = "contacts"     # key prefix / subdirectory (omit for bare keys)
//!
//! [signup]
//! min_password_length = 1    # shortest password the sign-up form accepts
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ContactsConfig`] | Top-level config with builder helpers, TOML (de)serialisation and a lenient loader. |
//! | [`StorageConfig`] | Storage section, currently the optional `namespace`. |
//! | [`SignUpConfig`] | Sign-up section, `min_password_length` with a default of **1** (non-empty). |
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `contacts.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactsConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub signup: SignUpConfig,
}

/// Storage-specific configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Prefix for every persisted key. `None` stores bare keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Sign-up form rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignUpConfig {
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

fn default_min_password_length() -> usize {
    1
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
        }
    }
}

impl ContactsConfig {
    /// Create a config with the given storage namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            storage: StorageConfig {
                namespace: Some(namespace.into()),
            },
            signup: SignUpConfig::default(),
        }
    }

    /// Builder method to set the minimum password length.
    pub fn with_min_password_length(mut self, len: usize) -> Self {
        self.signup.min_password_length = len;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "contacts.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse from TOML, falling back to the defaults when the text is invalid.
    pub fn load_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid {}, using defaults", Self::filename());
            Self::default()
        })
    }

    pub fn namespace(&self) -> Option<&str> {
        self.storage.namespace.as_deref()
    }
}
