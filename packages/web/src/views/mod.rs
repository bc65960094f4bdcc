mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;

mod contact_list;
pub use contact_list::ContactList;

mod add_edit_contact;
pub use add_edit_contact::AddEditContact;
