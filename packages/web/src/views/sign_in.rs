//! Sign-in page with email/password form.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let mut session = ui::use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let result = session.write().authenticate(&email(), &password());
        match result {
            Ok(()) => {
                nav.push(Route::ContactList {});
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Sign in" }

            form {
                onsubmit: handle_sign_in,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button { class: "primary", r#type: "submit", "Sign in" }
            }

            p {
                "No account yet? "
                button {
                    class: "link",
                    onclick: move |_| {
                        nav.push(Route::SignUp {});
                    },
                    "Sign up"
                }
            }
        }
    }
}
