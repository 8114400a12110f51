use rackdesk::logic::filter::ALL;
use rackdesk::logic::navigation::{next_page, prev_page};
use rackdesk::logic::pages::{cycle_option, PageKind, USER_ROLES};
use rackdesk::logic::route::{guard, Route, RouteDecision};

use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Go to `route`, or wherever the guard sends us instead
    ///
    /// Every navigation re-checks the stored token, so signing out in one
    /// place locks every protected page.
    pub fn navigate(&mut self, route: Route) {
        let decision = guard(route, self.store.as_ref());
        if let RouteDecision::Redirect(target) = decision {
            tracing::info!(requested = route.path(), redirect = target.path(), "route guard redirect");
        }

        let target = decision.target();
        tracing::debug!(route = target.path(), "navigated");

        self.model.ui.route = target;
        self.model.close_all_modals();
        self.model.ui.sidebar.on_navigate();

        self.load_route();
    }

    /// Fetch whatever the current route shows
    pub fn load_route(&mut self) {
        match self.model.ui.route {
            Route::Dashboard => {
                for kind in PageKind::ALL {
                    self.fetch_page(kind);
                }
            }
            route => {
                if let Some(kind) = PageKind::from_route(route) {
                    self.fetch_page(kind);
                }
            }
        }
    }

    pub fn fetch_page(&mut self, kind: PageKind) {
        self.model.pages.page_mut(kind).set_loading(true);

        let request = match kind {
            PageKind::Users => {
                let query = &self.model.pages.user_query;
                ApiRequest::FetchUsers {
                    page: query.page,
                    limit: query.limit,
                    role: Some(query.role.clone()).filter(|r| r != ALL),
                }
            }
            PageKind::Repairs => ApiRequest::FetchRepairs,
            PageKind::Racks => ApiRequest::FetchRacks,
            PageKind::Tickets => ApiRequest::FetchTickets,
        };
        self.send(request);
    }

    /// Step through the sidebar destinations
    pub fn navigate_relative(&mut self, forward: bool) {
        let nav = Route::NAVIGATION;
        let current = self.model.ui.route.nav_index().unwrap_or(0);
        let next = if forward {
            (current + 1) % nav.len()
        } else {
            (current + nav.len() - 1) % nav.len()
        };
        self.navigate(nav[next]);
    }

    pub fn next_users_page(&mut self) {
        let query = &self.model.pages.user_query;
        let rows = self.model.pages.users.records.len();
        match next_page(query.page, query.limit, query.total, rows) {
            Some(page) => {
                self.model.pages.user_query.page = page;
                self.fetch_page(PageKind::Users);
            }
            None => self.model.show_toast("Already on the last page".to_string()),
        }
    }

    pub fn prev_users_page(&mut self) {
        match prev_page(self.model.pages.user_query.page) {
            Some(page) => {
                self.model.pages.user_query.page = page;
                self.fetch_page(PageKind::Users);
            }
            None => self.model.show_toast("Already on the first page".to_string()),
        }
    }

    /// Server-side role filter; restarts from page 1
    pub fn cycle_user_role(&mut self) {
        let next = cycle_option(USER_ROLES, &self.model.pages.user_query.role);
        self.model.pages.user_query.role = next.to_string();
        self.model.pages.user_query.page = 1;
        self.fetch_page(PageKind::Users);
    }
}
