//! # Routes and the navigation guard
//!
//! [`AppRoute`] lists the four screens and carries the per-route metadata the
//! guard needs. [`check_route`] is evaluated on every navigation, before the
//! target view renders:
//!
//! | Target | Logged in | Decision |
//! |--------|-----------|----------|
//! | route with `requires_auth()` | no | redirect to [`AppRoute::SignIn`] |
//! | [`AppRoute::SignIn`] | yes | redirect to [`AppRoute::ContactList`] |
//! | anything else | either | allow |
//!
//! The guard keeps no state of its own. Side-effecting navigation goes through
//! the [`Navigator`] trait so the rule can be exercised without a router.

/// A screen of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    SignIn,
    SignUp,
    ContactList,
    AddEditContact,
}

impl AppRoute {
    pub const ALL: [AppRoute; 4] = [
        AppRoute::SignIn,
        AppRoute::SignUp,
        AppRoute::ContactList,
        AppRoute::AddEditContact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::SignIn => "/sign-in",
            AppRoute::SignUp => "/sign-up",
            AppRoute::ContactList => "/contact-list",
            AppRoute::AddEditContact => "/add-edit-contact",
        }
    }

    /// Whether the screen is only reachable while logged in.
    pub fn requires_auth(self) -> bool {
        matches!(self, AppRoute::ContactList | AppRoute::AddEditContact)
    }

    /// Resolve a URL path. Unknown paths land on the sign-in screen.
    pub fn from_path(path: &str) -> AppRoute {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .unwrap_or(AppRoute::SignIn)
    }
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(AppRoute),
}

impl GuardDecision {
    pub fn redirect(self) -> Option<AppRoute> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::Redirect(route) => Some(route),
        }
    }
}

/// Decide whether navigation to `target` may proceed.
pub fn check_route(target: AppRoute, logged_in: bool) -> GuardDecision {
    if target.requires_auth() && !logged_in {
        return GuardDecision::Redirect(AppRoute::SignIn);
    }
    if target == AppRoute::SignIn && logged_in {
        return GuardDecision::Redirect(AppRoute::ContactList);
    }
    GuardDecision::Allow
}

/// Something that can move the application to another screen.
pub trait Navigator {
    fn navigate(&self, route: AppRoute);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every navigation request.
    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub visited: RefCell<Vec<AppRoute>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: AppRoute) {
            self.visited.borrow_mut().push(route);
        }
    }

    #[test]
    fn test_protected_routes_redirect_when_logged_out() {
        assert_eq!(
            check_route(AppRoute::ContactList, false),
            GuardDecision::Redirect(AppRoute::SignIn)
        );
        assert_eq!(
            check_route(AppRoute::AddEditContact, false),
            GuardDecision::Redirect(AppRoute::SignIn)
        );
    }

    #[test]
    fn test_sign_in_redirects_when_logged_in() {
        assert_eq!(
            check_route(AppRoute::SignIn, true),
            GuardDecision::Redirect(AppRoute::ContactList)
        );
    }

    #[test]
    fn test_other_combinations_allowed() {
        let allowed = [
            (AppRoute::SignIn, false),
            (AppRoute::SignUp, false),
            (AppRoute::SignUp, true),
            (AppRoute::ContactList, true),
            (AppRoute::AddEditContact, true),
        ];
        for (route, logged_in) in allowed {
            assert_eq!(
                check_route(route, logged_in),
                GuardDecision::Allow,
                "{route:?} logged_in={logged_in}"
            );
        }
    }

    #[test]
    fn test_path_resolution() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), route);
        }
        assert_eq!(AppRoute::from_path("/contact-list/"), AppRoute::ContactList);
        assert_eq!(
            AppRoute::from_path("/add-edit-contact?id=17"),
            AppRoute::AddEditContact
        );
        assert_eq!(AppRoute::from_path("/nowhere"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_path(""), AppRoute::SignIn);
    }

    #[test]
    fn test_decision_redirect_accessor() {
        assert_eq!(GuardDecision::Allow.redirect(), None);
        assert_eq!(
            GuardDecision::Redirect(AppRoute::SignIn).redirect(),
            Some(AppRoute::SignIn)
        );
    }
}
