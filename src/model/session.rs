//! Session Model
//!
//! Who is signed in and the state of the sign-in form.

use crate::api::AdminUser;
use crate::logic::forms::{FormField, FormState};

#[derive(Clone, Debug)]
pub struct SessionModel {
    /// Profile saved at login, if the server returned one
    pub admin: Option<AdminUser>,

    pub login_form: FormState,
}

impl SessionModel {
    pub fn new(admin: Option<AdminUser>) -> Self {
        Self {
            admin,
            login_form: login_form(),
        }
    }

    pub fn admin_label(&self) -> &str {
        self.admin
            .as_ref()
            .map(|a| a.display_name())
            .unwrap_or("signed out")
    }

    pub fn reset_login_form(&mut self) {
        self.login_form = login_form();
    }
}

fn login_form() -> FormState {
    FormState::new(
        "Admin Sign In",
        vec![
            FormField::new("email", "Email").required(),
            FormField::new("password", "Password").required().secret(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_label_falls_back() {
        let session = SessionModel::new(None);
        assert_eq!(session.admin_label(), "signed out");

        let admin = AdminUser {
            email: Some("ops@example.com".to_string()),
            ..AdminUser::default()
        };
        assert_eq!(SessionModel::new(Some(admin)).admin_label(), "ops@example.com");
    }

    #[test]
    fn test_reset_clears_typed_values() {
        let mut session = SessionModel::new(None);
        session.login_form.push_char('x');
        session.reset_login_form();
        assert_eq!(session.login_form.value("email"), None);
    }
}
