//! # Contacts crate — accounts, contact lists and navigation gating
//!
//! The service layer of the contact manager. It owns no UI; the `ui` and `web`
//! crates hold one [`UserDirectory`] per session and call into it from event
//! handlers. All state is persisted through a [`store::KeyValueStore`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `User` and `Contact` records as they are stored |
//! | [`auth`] | The persisted "logged in" flag ([`AuthState`]) |
//! | [`directory`] | Sign-up, sign-in, current user/contact selection and contact CRUD ([`UserDirectory`]) |
//! | [`guard`] | The application routes and the navigation-time redirect rule |
//! | [`error`] | User-facing sign-in and sign-up failures |

pub mod auth;
mod clock;
pub mod directory;
pub mod error;
pub mod guard;
pub mod models;

pub use auth::AuthState;
pub use directory::{SignUpForm, UserDirectory};
pub use error::{SignInError, SignUpError};
pub use guard::{check_route, AppRoute, GuardDecision, Navigator};
pub use models::{Contact, User};
