//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **SessionModel**: Signed-in admin and the sign-in form
//! - **PagesModel**: Fetched lists, filters and selections per page
//! - **UiModel**: Route, sidebar, dialogs, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the binary's App
//! - Pure accessors: Helper methods are side-effect free

pub mod pages;
pub mod session;
pub mod types;
pub mod ui;

pub use pages::{ListPage, ListView, PagesModel, Record, UserQuery};
pub use session::SessionModel;
pub use types::*;
pub use ui::UiModel;

use crate::api::AdminUser;
use crate::logic::pages::PageKind;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub session: SessionModel,

    pub pages: PagesModel,

    pub ui: UiModel,
}

impl Model {
    pub fn new(admin: Option<AdminUser>, page_limit: u32, vim_mode: bool, cell_width_px: u16, columns: u16) -> Self {
        Self {
            session: SessionModel::new(admin),
            pages: PagesModel::new(page_limit),
            ui: UiModel::new(vim_mode, cell_width_px, columns),
        }
    }

    /// List page behind the current route, if the route is a list page
    pub fn current_page_kind(&self) -> Option<PageKind> {
        PageKind::from_route(self.ui.route)
    }

    pub fn current_page(&self) -> Option<&dyn ListView> {
        self.current_page_kind().map(|kind| self.pages.page(kind))
    }

    pub fn current_page_mut(&mut self) -> Option<&mut dyn ListView> {
        let kind = self.current_page_kind()?;
        Some(self.pages.page_mut(kind))
    }

    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::route::Route;

    #[test]
    fn test_model_creation() {
        let model = Model::new(None, 10, false, 8, 200);
        assert_eq!(model.pages.user_query.limit, 10);
        assert_eq!(model.pages.user_query.page, 1);
        assert!(model.session.admin.is_none());
        assert!(!model.ui.vim_mode);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(None, 10, false, 8, 200);
        let _cloned = model.clone();
    }

    #[test]
    fn test_current_page_follows_route() {
        let mut model = Model::new(None, 10, false, 8, 200);
        assert!(model.current_page().is_none());

        model.ui.route = Route::RackAbc;
        assert_eq!(model.current_page().map(|p| p.kind()), Some(PageKind::Racks));

        model.ui.route = Route::Dashboard;
        assert!(model.current_page_kind().is_none());
    }

    #[test]
    fn test_toast() {
        let mut model = Model::new(None, 10, false, 8, 200);
        model.show_toast("Test".to_string());
        assert!(model.ui.toast_message.is_some());
        model.dismiss_toast();
        assert!(model.ui.toast_message.is_none());
    }
}
