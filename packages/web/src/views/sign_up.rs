//! Registration page with email/password form.

use contacts::SignUpForm;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let mut session = ui::use_session();
    let nav = use_navigator();
    let mut form = use_signal(SignUpForm::default);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let result = session.write().register(&form.peek());
        match result {
            Ok(()) => {
                nav.push(Route::SignIn {});
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Create account" }

            form {
                onsubmit: handle_sign_up,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: form.read().email.clone(),
                    oninput: move |evt| form.write().email = evt.value(),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: form.read().password.clone(),
                    oninput: move |evt| form.write().password = evt.value(),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: form.read().confirm_password.clone(),
                    oninput: move |evt| form.write().confirm_password = evt.value(),
                }
                button { class: "primary", r#type: "submit", "Sign up" }
            }

            p {
                "Already have an account? "
                button {
                    class: "link",
                    onclick: move |_| {
                        nav.push(Route::SignIn {});
                    },
                    "Sign in"
                }
            }
        }
    }
}
