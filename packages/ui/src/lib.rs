//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{make_store, use_session, AppStore, Session, SessionProvider};

mod navbar;
pub use navbar::Navbar;

mod contact_card;
pub use contact_card::ContactCard;
