//! UI Model
//!
//! Current route, sidebar, modal dialogs, search input and toasts.

use std::time::Instant;

use super::types::{Modal, VimCommandState};
use crate::logic::layout::{viewport_width, SidebarState};
use crate::logic::route::Route;

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Nominal pixel width of one terminal column
    pub cell_width_px: u16,

    // ============================================
    // NAVIGATION & LAYOUT
    // ============================================
    /// Route currently rendered (always the guard's decision)
    pub route: Route,

    pub sidebar: SidebarState,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    pub modal: Option<Modal>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, cell_width_px: u16, columns: u16) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            cell_width_px,
            route: Route::AdminLogin,
            sidebar: SidebarState::for_viewport(viewport_width(columns, cell_width_px)),
            modal: None,
            toast_message: None,
            search_mode: false,
            should_quit: false,
        }
    }

    pub fn close_all_modals(&mut self) {
        self.modal = None;
        self.search_mode = false;
    }

    /// Terminal resized to `columns` wide
    pub fn on_resize(&mut self, columns: u16) {
        self.sidebar
            .on_resize(viewport_width(columns, self.cell_width_px));
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((message, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(message, timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::pages::PageKind;
    use crate::model::types::ConfirmDeleteState;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false, 8, 200);
        assert_eq!(model.route, Route::AdminLogin);
        assert!(!model.vim_mode);
        assert!(!model.should_quit);
        // 200 columns * 8px = 1600px, desktop
        assert!(model.sidebar.sidebar_open);
        assert!(!model.sidebar.is_mobile);
    }

    #[test]
    fn test_narrow_terminal_starts_mobile() {
        let model = UiModel::new(false, 8, 80);
        assert!(model.sidebar.is_mobile);
        assert!(!model.sidebar.sidebar_open);
    }

    #[test]
    fn test_resize_recomputes_sidebar() {
        let mut model = UiModel::new(false, 8, 200);
        model.on_resize(90);
        assert!(model.sidebar.is_mobile);
        assert!(!model.sidebar.sidebar_open);

        model.on_resize(120);
        assert!(!model.sidebar.is_mobile);
        assert!(model.sidebar.sidebar_open);
    }

    #[test]
    fn test_close_all_modals_also_leaves_search() {
        let mut model = UiModel::new(false, 8, 200);
        model.search_mode = true;
        model.modal = Some(Modal::ConfirmDelete(ConfirmDeleteState {
            kind: PageKind::Racks,
            id: "r1".to_string(),
            label: "A-1".to_string(),
        }));

        model.close_all_modals();
        assert!(model.modal.is_none());
        assert!(!model.search_mode);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false, 8, 200);
        model.show_toast("Saved".to_string());
        assert!(model.toast_message.is_some());
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }
}
