use contacts::Contact;
use dioxus::prelude::*;
use ui::{ContactCard, Navbar};

use crate::{Route, RouterNavigator};

#[component]
pub fn ContactList() -> Element {
    let mut session = ui::use_session();
    let nav = use_navigator();

    use_hook(|| session.peek().auth().require_login(&RouterNavigator(nav)));

    let contacts = session.read().current_user_contacts().to_vec();
    let email = session.read().current_user().map(|user| user.email.clone());

    let on_edit = move |contact: Contact| {
        session.write().set_current_contact(contact);
        nav.push(Route::AddEditContact {});
    };

    let on_delete = move |contact: Contact| {
        session.write().delete_contact(&contact);
    };

    let on_add = move |_| {
        session.write().clear_current_contact();
        nav.push(Route::AddEditContact {});
    };

    let on_log_out = move |_| {
        session.write().sign_out();
        nav.push(Route::SignIn {});
    };

    rsx! {
        Navbar {
            email,
            on_log_out,
            h1 { "Contacts" }
        }

        div {
            class: "contact-list",

            button { class: "primary", onclick: on_add, "Add contact" }

            if contacts.is_empty() {
                p { class: "placeholder", "No contacts yet." }
            }

            for contact in contacts {
                ContactCard {
                    key: "{contact.id}",
                    contact: contact.clone(),
                    on_edit,
                    on_delete,
                }
            }
        }
    }
}
