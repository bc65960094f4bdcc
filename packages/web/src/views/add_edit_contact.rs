use dioxus::prelude::*;
use ui::Navbar;

use crate::{Route, RouterNavigator};

/// Form for a new contact, or for the one staged by the contact list.
#[component]
pub fn AddEditContact() -> Element {
    let mut session = ui::use_session();
    let nav = use_navigator();

    use_hook(|| session.peek().auth().require_login(&RouterNavigator(nav)));

    let staged = use_hook(|| session.peek().current_contact().cloned());
    let editing = staged.is_some();
    let mut contact = use_signal(|| staged.clone().unwrap_or_default());

    // The staged contact is consumed once the form has it
    use_effect(move || {
        if session.peek().current_contact().is_some() {
            session.write().clear_current_contact();
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let mut draft = contact();
        session.write().save_contact(&mut draft, editing);
        nav.push(Route::ContactList {});
    };

    let on_log_out = move |_| {
        session.write().sign_out();
        nav.push(Route::SignIn {});
    };

    let email = session.read().current_user().map(|user| user.email.clone());

    rsx! {
        Navbar {
            email,
            on_log_out,
            h1 { if editing { "Edit contact" } else { "Add contact" } }
        }

        form {
            class: "contact-form",
            onsubmit: handle_save,

            label { "Name" }
            input {
                r#type: "text",
                value: contact.read().name.clone(),
                oninput: move |evt| contact.write().name = evt.value(),
            }
            label { "Phone" }
            input {
                r#type: "tel",
                value: contact.read().phone.clone(),
                oninput: move |evt| contact.write().phone = evt.value(),
            }
            label { "Email" }
            input {
                r#type: "email",
                value: contact.read().email.clone(),
                oninput: move |evt| contact.write().email = evt.value(),
            }

            div {
                class: "form-actions",
                button { class: "primary", r#type: "submit", "Save" }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| {
                        nav.push(Route::ContactList {});
                    },
                    "Cancel"
                }
            }
        }
    }
}
