//! # User directory — accounts, sessions and contact lists
//!
//! [`UserDirectory`] is the single service object a session holds. It keeps the
//! authoritative in-memory copy of every account (`users`), which account is
//! active, and which contact is staged for the edit form. Every mutation is
//! flushed to the [`KeyValueStore`] immediately, so a reload picks up exactly
//! where the previous page left off.
//!
//! ## Startup
//!
//! [`UserDirectory::load`] reads `users` and `currentContact`, then, if the
//! persisted auth flag is set, rehydrates the active account by looking up the
//! email of the stored `currentUser` record. A stored record whose email no
//! longer exists in `users` is ignored.
//!
//! ## Accounts
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`sign_up`](UserDirectory::sign_up) | Adds an account with no contacts; `false` if the email is taken (exact, case-sensitive). |
//! | [`register`](UserDirectory::register) | Sign-up form flow: required fields, confirmation, minimum length, then `sign_up`. |
//! | [`sign_in`](UserDirectory::sign_in) | Exact email + password match selects the account and sets the auth flag. |
//! | [`sign_out`](UserDirectory::sign_out) | Clears the auth flag and both selections. |
//!
//! ## Contacts
//!
//! All contact operations act on the active account and silently do nothing
//! without one. New contacts get a millisecond timestamp id that is bumped past
//! the largest existing id when the clock has not moved, so ids stay unique and
//! increasing within an account. Edits and deletes both match by id; an unknown
//! id leaves the list untouched.

use store::config::SignUpConfig;
use store::{keys, read_json, read_json_records, remove_key, write_json, KeyValueStore};

use crate::auth::AuthState;
use crate::clock::now_millis;
use crate::error::{SignInError, SignUpError};
use crate::models::{Contact, User};

/// Fields of the sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Accounts and contact lists for one session.
#[derive(Debug)]
pub struct UserDirectory<S: KeyValueStore + Clone> {
    store: S,
    auth: AuthState<S>,
    users: Vec<User>,
    /// Email of the active account.
    current_user: Option<String>,
    current_contact: Option<Contact>,
    signup: SignUpConfig,
}

impl<S: KeyValueStore + Clone> UserDirectory<S> {
    /// Load the directory from `store` with default sign-up rules.
    pub fn load(store: S) -> Self {
        Self::with_config(store, SignUpConfig::default())
    }

    pub fn with_config(store: S, signup: SignUpConfig) -> Self {
        let users: Vec<User> = read_json_records(&store, keys::USERS).unwrap_or_default();
        let current_contact = read_json(&store, keys::CURRENT_CONTACT);
        let auth = AuthState::new(store.clone());

        let mut directory = Self {
            store,
            auth,
            users,
            current_user: None,
            current_contact,
            signup,
        };

        if directory.auth.is_logged_in() {
            if let Some(stored) = read_json::<User>(&directory.store, keys::CURRENT_USER) {
                directory.set_current_user(&stored.email);
            }
        }

        tracing::debug!(
            users = directory.users.len(),
            active = directory.current_user.is_some(),
            "user directory loaded"
        );
        directory
    }

    pub fn auth(&self) -> &AuthState<S> {
        &self.auth
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.is_logged_in()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Create an account. Returns `false` when the email is already registered.
    pub fn sign_up(&mut self, email: &str, password: &str) -> bool {
        if self.find_user(email).is_some() {
            tracing::info!(email, "sign-up rejected, email exists");
            return false;
        }
        self.users.push(User::new(email, password));
        self.save_users();
        tracing::info!(email, "account created");
        true
    }

    /// Validate the sign-up form and create the account.
    pub fn register(&mut self, form: &SignUpForm) -> Result<(), SignUpError> {
        if form.email.is_empty() || form.password.is_empty() {
            return Err(SignUpError::MissingFields);
        }
        if form.password != form.confirm_password {
            return Err(SignUpError::PasswordMismatch);
        }
        let min = self.signup.min_password_length;
        if form.password.chars().count() < min {
            return Err(SignUpError::PasswordTooShort(min));
        }
        if !self.sign_up(&form.email, &form.password) {
            return Err(SignUpError::EmailTaken);
        }
        Ok(())
    }

    /// Select the account matching `email` and `password` and set the auth flag.
    pub fn sign_in(&mut self, email: &str, password: &str) -> bool {
        let matched = self
            .find_user(email)
            .is_some_and(|user| user.password == password);
        if !matched {
            tracing::info!(email, "sign-in failed");
            return false;
        }
        self.current_user = Some(email.to_string());
        self.auth.log_in();
        self.save_current_user();
        tracing::info!(email, "signed in");
        true
    }

    /// [`sign_in`](Self::sign_in) with the user-facing error.
    pub fn authenticate(&mut self, email: &str, password: &str) -> Result<(), SignInError> {
        if self.sign_in(email, password) {
            Ok(())
        } else {
            Err(SignInError::InvalidCredentials)
        }
    }

    pub fn sign_out(&mut self) {
        self.auth.log_out();
        self.current_user = None;
        self.current_contact = None;
        remove_key(&self.store, keys::CURRENT_USER);
        remove_key(&self.store, keys::CURRENT_CONTACT);
        tracing::info!("signed out");
    }

    pub fn current_user(&self) -> Option<&User> {
        self.find_user(self.current_user.as_deref()?)
    }

    /// Contacts of the active account, empty when nobody is signed in.
    pub fn current_user_contacts(&self) -> &[Contact] {
        self.current_user()
            .map(|user| user.contacts.as_slice())
            .unwrap_or_default()
    }

    /// Add (`editing == false`) or replace (`editing == true`) a contact of the active account.
    ///
    /// Adding assigns `contact.id`. Replacing matches on `contact.id` and does nothing
    /// when no contact has that id.
    pub fn save_contact(&mut self, contact: &mut Contact, editing: bool) {
        let now = now_millis();
        let Some(user) = self.current_user_mut() else {
            tracing::debug!("save ignored, no active account");
            return;
        };

        if editing {
            if !contact.is_saved() {
                tracing::debug!("edit ignored, contact was never saved");
                return;
            }
            match user.contacts.iter_mut().find(|c| c.id == contact.id) {
                Some(existing) => *existing = contact.clone(),
                None => tracing::debug!(id = %contact.id, "edit ignored, unknown contact"),
            }
        } else {
            contact.id = next_contact_id(&user.contacts, now);
            user.contacts.push(contact.clone());
            tracing::debug!(id = %contact.id, "contact added");
        }
        self.persist();
    }

    /// Remove the contact with the same id from the active account.
    ///
    /// Returns whether anything was removed.
    pub fn delete_contact(&mut self, contact: &Contact) -> bool {
        if !contact.is_saved() {
            return false;
        }
        let Some(user) = self.current_user_mut() else {
            return false;
        };
        let Some(index) = user.contacts.iter().position(|c| c.id == contact.id) else {
            return false;
        };
        user.contacts.remove(index);
        self.persist();
        tracing::debug!(id = %contact.id, "contact deleted");
        true
    }

    /// Stage a contact for the edit form.
    pub fn set_current_contact(&mut self, contact: Contact) {
        write_json(&self.store, keys::CURRENT_CONTACT, &contact);
        self.current_contact = Some(contact);
    }

    pub fn current_contact(&self) -> Option<&Contact> {
        self.current_contact.as_ref()
    }

    pub fn clear_current_contact(&mut self) {
        self.current_contact = None;
        remove_key(&self.store, keys::CURRENT_CONTACT);
    }

    /// Return the staged contact and clear the slot.
    pub fn take_current_contact(&mut self) -> Option<Contact> {
        let contact = self.current_contact.take()?;
        remove_key(&self.store, keys::CURRENT_CONTACT);
        Some(contact)
    }

    /// Make the account registered under `email` the active one, or nobody if unknown.
    pub fn set_current_user(&mut self, email: &str) {
        self.current_user = self.find_user(email).map(|user| user.email.clone());
        self.save_current_user();
    }

    /// Reload accounts from the store and re-resolve the active account.
    ///
    /// Picks up changes made by another tab since this directory was loaded.
    pub fn refresh_current_user(&mut self) {
        let Some(email) = self.current_user.clone() else {
            return;
        };
        if let Some(users) = read_json_records(&self.store, keys::USERS) {
            self.users = users;
        }
        self.set_current_user(&email);
    }

    fn find_user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    fn current_user_mut(&mut self) -> Option<&mut User> {
        let email = self.current_user.as_deref()?;
        self.users.iter_mut().find(|user| user.email == email)
    }

    fn persist(&self) {
        self.save_users();
        self.save_current_user();
    }

    fn save_users(&self) {
        write_json(&self.store, keys::USERS, &self.users);
    }

    fn save_current_user(&self) {
        match self.current_user() {
            Some(user) => write_json(&self.store, keys::CURRENT_USER, user),
            None => remove_key(&self.store, keys::CURRENT_USER),
        }
    }
}

/// Millisecond timestamp id, bumped past the largest numeric id already in use.
///
/// When the largest id cannot be bumped, a `<now>-<n>` id not yet taken is used.
fn next_contact_id(contacts: &[Contact], now_ms: u64) -> String {
    let latest = contacts
        .iter()
        .filter_map(|c| c.id.parse::<u64>().ok())
        .max();
    match latest {
        Some(latest) if latest >= now_ms => match latest.checked_add(1) {
            Some(id) => id.to_string(),
            None => suffixed_contact_id(contacts, now_ms),
        },
        _ => now_ms.to_string(),
    }
}

fn suffixed_contact_id(contacts: &[Contact], now_ms: u64) -> String {
    let mut n = 1u64;
    loop {
        let id = format!("{now_ms}-{n}");
        if !contacts.iter().any(|c| c.id == id) {
            return id;
        }
        n += 1;
    }
}
