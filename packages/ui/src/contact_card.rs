use contacts::Contact;
use dioxus::prelude::*;

/// A single contact. Double-click or "Edit" opens it in the form.
#[component]
pub fn ContactCard(
    contact: Contact,
    on_edit: EventHandler<Contact>,
    on_delete: EventHandler<Contact>,
) -> Element {
    let edit = contact.clone();
    let edit_button = contact.clone();
    let delete = contact.clone();

    rsx! {
        div {
            class: "contact-card",
            ondoubleclick: move |_| on_edit.call(edit.clone()),

            if let Some(image) = &contact.image {
                img { class: "contact-image", src: "{image}", alt: "{contact.name}" }
            }
            div {
                class: "contact-details",
                h3 { "{contact.name}" }
                if !contact.phone.is_empty() {
                    p { "{contact.phone}" }
                }
                if !contact.email.is_empty() {
                    p { "{contact.email}" }
                }
            }
            div {
                class: "contact-actions",
                button {
                    class: "primary",
                    onclick: move |_| on_edit.call(edit_button.clone()),
                    "Edit"
                }
                button {
                    class: "danger",
                    onclick: move |_| on_delete.call(delete.clone()),
                    "Delete"
                }
            }
        }
    }
}
