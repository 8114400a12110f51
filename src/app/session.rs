use rackdesk::api::LoginSession;
use rackdesk::logic::errors::{failure_toast, format_error_message};
use rackdesk::logic::route::Route;
use rackdesk::session::{clear_session, store_login};

use crate::services::api::ApiRequest;
use crate::App;

impl App {
    pub fn submit_login(&mut self) {
        let form = &mut self.model.session.login_form;
        if form.submitting || form.validate().is_err() {
            return;
        }

        let (Some(email), Some(password)) = (form.value("email"), form.value("password")) else {
            return;
        };
        form.submitting = true;

        tracing::info!(%email, "signing in");
        self.send(ApiRequest::Login { email, password });
    }

    pub fn finish_login(&mut self, result: anyhow::Result<LoginSession>) {
        self.model.session.login_form.submitting = false;

        let login = match result {
            Ok(login) => login,
            Err(e) => {
                tracing::warn!(error = %e, "sign in failed");
                // a 401 here means bad credentials, not an expired session
                self.model
                    .show_toast(format!("Error: Sign in failed: {}", format_error_message(&e)));
                return;
            }
        };

        if let Err(e) = store_login(self.store.as_ref(), &login.token, login.admin.as_ref()) {
            tracing::error!(error = %e, "could not persist session");
            self.model.show_toast(failure_toast("Could not save session", &e));
            return;
        }

        self.model.session.admin = login.admin;
        self.model.session.reset_login_form();
        self.model
            .show_toast(format!("Signed in as {}", self.model.session.admin_label()));
        self.navigate(Route::Dashboard);
    }

    /// Forget every stored credential and return to the sign-in screen
    pub fn logout(&mut self) {
        if let Err(e) = clear_session(self.store.as_ref(), &self.resolver) {
            tracing::error!(error = %e, "could not clear session");
            self.model.show_toast(failure_toast("Sign out failed", &e));
            return;
        }

        tracing::info!("signed out");
        self.model.session.admin = None;
        self.model.show_toast("Signed out".to_string());
        self.navigate(Route::AdminLogin);
    }
}
