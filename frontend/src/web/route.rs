//! Route definitions and the access guard.
//!
//! Plain domain logic with no DOM access, so every decision here can be
//! tested natively.

use std::fmt::Display;

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Login page (default)
    #[default]
    Login,
    Register,
    /// Match list (protected)
    Matches,
    /// New match form (protected)
    AddMatch,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Matches,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/add" => Self::AddMatch,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Matches => "/",
            Self::AddMatch => "/add",
            Self::NotFound => "/404",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Matches | Self::AddMatch)
    }

    /// Pages a signed-in user is moved away from.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Matches
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Outcome of [`guard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

impl GuardDecision {
    /// The route that ends up on screen either way.
    pub fn route(&self) -> AppRoute {
        match self {
            GuardDecision::Render(route) | GuardDecision::Redirect(route) => *route,
        }
    }
}

/// Access guard. Stateless; call it on every navigation and render.
pub fn guard(is_authenticated: bool, requested: AppRoute) -> GuardDecision {
    if requested.requires_auth() && !is_authenticated {
        GuardDecision::Redirect(AppRoute::auth_failure_redirect())
    } else if requested.should_redirect_when_authenticated() && is_authenticated {
        GuardDecision::Redirect(AppRoute::auth_success_redirect())
    } else {
        GuardDecision::Render(requested)
    }
}

/// The route that ends up on screen for `requested`.
pub fn resolve(is_authenticated: bool, requested: AppRoute) -> AppRoute {
    guard(is_authenticated, requested).route()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::MemoryTokenStore;
    use crate::session::{SessionStore, Token};

    #[test]
    fn test_path_round_trip() {
        for route in [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Matches,
            AppRoute::AddMatch,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/add/"), AppRoute::AddMatch);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_protected_routes_redirect_when_signed_out() {
        for route in [AppRoute::Matches, AppRoute::AddMatch] {
            assert_eq!(
                guard(false, route),
                GuardDecision::Redirect(AppRoute::Login)
            );
            assert_eq!(guard(true, route), GuardDecision::Render(route));
        }
    }

    #[test]
    fn test_public_routes() {
        assert_eq!(guard(false, AppRoute::Login), GuardDecision::Render(AppRoute::Login));
        assert_eq!(
            guard(false, AppRoute::Register),
            GuardDecision::Render(AppRoute::Register)
        );
        assert_eq!(
            guard(true, AppRoute::NotFound),
            GuardDecision::Render(AppRoute::NotFound)
        );
    }

    #[test]
    fn test_signed_in_user_leaves_login() {
        assert_eq!(
            guard(true, AppRoute::Login),
            GuardDecision::Redirect(AppRoute::Matches)
        );
        assert_eq!(guard(true, AppRoute::Register).route(), AppRoute::Matches);
    }

    #[test]
    fn test_logout_is_seen_on_next_evaluation() {
        let mut store = SessionStore::initialize(MemoryTokenStore::default());
        store.login(Token::new("t"));
        assert_eq!(
            guard(store.is_authenticated(), AppRoute::AddMatch),
            GuardDecision::Render(AppRoute::AddMatch)
        );

        store.logout();
        assert_eq!(
            guard(store.is_authenticated(), AppRoute::AddMatch),
            GuardDecision::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_resolved_route_is_stable_after_redirect() {
        let all = [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Matches,
            AppRoute::AddMatch,
            AppRoute::NotFound,
        ];
        for signed_in in [false, true] {
            for route in all {
                let shown = resolve(signed_in, route);
                // Following a redirect must not change what is on screen.
                assert_eq!(resolve(signed_in, shown), shown, "{route} signed_in={signed_in}");
            }
        }
        // Login flips the outlet straight to the match list.
        assert_eq!(resolve(true, AppRoute::Login), AppRoute::Matches);
    }
}
