use dioxus::prelude::*;

/// Top bar with the active account and a log-out button.
#[component]
pub fn Navbar(
    #[props(!optional)] email: Option<String>,
    on_log_out: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "navbar",
            {children}
            if let Some(email) = email {
                span { class: "navbar-user", "{email}" }
            }
            button {
                class: "secondary",
                onclick: move |_| on_log_out.call(()),
                "Log out"
            }
        }
    }
}
