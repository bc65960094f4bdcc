use contacts::{check_route, AppRoute};
use dioxus::prelude::*;
use store::ContactsConfig;

use views::{AddEditContact, ContactList, SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guard)]
        #[route("/sign-in")]
        SignIn {},
        #[route("/sign-up")]
        SignUp {},
        #[route("/contact-list")]
        ContactList {},
        #[route("/add-edit-contact")]
        AddEditContact {},
    #[end_layout]
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

impl Route {
    fn app_route(&self) -> AppRoute {
        match self {
            Route::SignIn {} => AppRoute::SignIn,
            Route::SignUp {} => AppRoute::SignUp,
            Route::ContactList {} => AppRoute::ContactList,
            Route::AddEditContact {} => AppRoute::AddEditContact,
            Route::Fallback { segments } => AppRoute::from_path(&format!("/{}", segments.join("/"))),
        }
    }
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::SignIn => Route::SignIn {},
            AppRoute::SignUp => Route::SignUp {},
            AppRoute::ContactList => Route::ContactList {},
            AppRoute::AddEditContact => Route::AddEditContact {},
        }
    }
}

/// Lets the service layer trigger router navigation.
#[derive(Clone, Copy)]
struct RouterNavigator(Navigator);

impl contacts::Navigator for RouterNavigator {
    fn navigate(&self, route: AppRoute) {
        self.0.replace(Route::from(route));
    }
}

const CONFIG: &str = include_str!("../contacts.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ContactsConfig::load_or_default(CONFIG));

    rsx! {
        ui::SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Runs the route guard before any view renders.
#[component]
fn Guard() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let mut session = ui::use_session();

    // Re-sync the active account from storage on every transition
    use_effect(use_reactive!(|route| {
        tracing::debug!(?route, "route entered");
        if session.peek().is_logged_in() {
            session.write().refresh_current_user();
        }
    }));

    let logged_in = session.peek().is_logged_in();
    if let Some(target) = check_route(route.app_route(), logged_in).redirect() {
        tracing::debug!(from = ?route, to = ?target, "route guard redirect");
        nav.replace(Route::from(target));
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Unknown paths fall through to the sign-in screen.
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let route = Route::Fallback { segments };
    nav.replace(Route::from(route.app_route()));
    rsx! {}
}
