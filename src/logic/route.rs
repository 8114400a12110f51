//! Routes and the route guard
//!
//! The console mirrors the web dashboard's URL space so paths can be passed
//! on the command line and shown in the status bar. Protected routes render
//! only while a session token is stored.

use crate::session::{has_session_token, CredentialStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/admin` - sign-in screen, also the redirect target
    AdminLogin,
    /// `/login`
    Login,
    Dashboard,
    Users,
    Repairs,
    RackAbc,
    SupportTickets,
}

impl Route {
    /// Protected routes in sidebar order
    pub const NAVIGATION: [Route; 5] = [
        Route::Dashboard,
        Route::Users,
        Route::Repairs,
        Route::RackAbc,
        Route::SupportTickets,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::AdminLogin => "/admin",
            Route::Login => "/login",
            Route::Dashboard => "/admin/dashboard",
            Route::Users => "/admin/users",
            Route::Repairs => "/admin/repairs",
            Route::RackAbc => "/admin/rack-abc",
            Route::SupportTickets => "/admin/support-tickets",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::AdminLogin | Route::Login => "Sign In",
            Route::Dashboard => "Dashboard",
            Route::Users => "Users",
            Route::Repairs => "Repair Orders",
            Route::RackAbc => "Rack Slots",
            Route::SupportTickets => "Support Tickets",
        }
    }

    /// Parse a path, tolerating a trailing slash
    ///
    /// # Examples
    /// ```
    /// use rackdesk::logic::route::Route;
    ///
    /// assert_eq!(Route::from_path("/admin/repairs/"), Some(Route::Repairs));
    /// assert_eq!(Route::from_path("/admin"), Some(Route::AdminLogin));
    /// assert_eq!(Route::from_path("/nowhere"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        [Route::AdminLogin, Route::Login]
            .into_iter()
            .chain(Route::NAVIGATION)
            .find(|route| route.path() == normalized)
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::AdminLogin | Route::Login)
    }

    /// Position in the sidebar, if the route appears there
    pub fn nav_index(&self) -> Option<usize> {
        Route::NAVIGATION.iter().position(|r| r == self)
    }
}

/// Outcome of checking a route against the stored session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

impl RouteDecision {
    /// The route that ends up on screen
    pub fn target(&self) -> Route {
        match self {
            RouteDecision::Render(route) | RouteDecision::Redirect(route) => *route,
        }
    }
}

/// Gate a route on the presence of the `token` key
///
/// The token is not decoded or checked for expiry; any non-empty value
/// unlocks protected routes.
pub fn guard(route: Route, store: &dyn CredentialStore) -> RouteDecision {
    if !route.is_protected() || has_session_token(store) {
        RouteDecision::Render(route)
    } else {
        RouteDecision::Redirect(Route::AdminLogin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    #[test]
    fn test_every_route_path_parses_back() {
        for route in [Route::AdminLogin, Route::Login].into_iter().chain(Route::NAVIGATION) {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_public_routes_render_without_token() {
        let store = MemoryStore::new();
        assert_eq!(guard(Route::Login, &store), RouteDecision::Render(Route::Login));
        assert_eq!(guard(Route::AdminLogin, &store), RouteDecision::Render(Route::AdminLogin));
    }

    #[test]
    fn test_protected_route_renders_with_token() {
        let store = MemoryStore::with_items([("token", "abc")]);
        assert_eq!(guard(Route::Repairs, &store), RouteDecision::Render(Route::Repairs));
    }

    #[test]
    fn test_empty_token_redirects() {
        let store = MemoryStore::with_items([("token", "")]);
        assert_eq!(guard(Route::Dashboard, &store).target(), Route::AdminLogin);
    }

    #[test]
    fn test_nav_index() {
        assert_eq!(Route::Dashboard.nav_index(), Some(0));
        assert_eq!(Route::SupportTickets.nav_index(), Some(4));
        assert_eq!(Route::Login.nav_index(), None);
    }
}
