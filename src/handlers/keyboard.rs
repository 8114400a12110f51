//! Keyboard Input Handler
//!
//! Precedence: Ctrl-C, then the sign-in form, then whichever modal is
//! open, then the search input, then page shortcuts.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use rackdesk::logic::navigation::{next_selection, prev_selection};
use rackdesk::logic::pages::PageKind;
use rackdesk::logic::route::Route;
use rackdesk::model::{Modal, VimCommandState};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    if !app.model.ui.route.is_protected() {
        handle_login_key(app, key);
        return Ok(());
    }

    if app.model.ui.modal.is_some() {
        handle_modal_key(app, key);
        return Ok(());
    }

    if app.model.ui.search_mode {
        match key.code {
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Enter => app.accept_search(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) => app.push_search_char(c),
            _ => {}
        }
        return Ok(());
    }

    handle_page_key(app, key);
    Ok(())
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.model.session.login_form;
    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Esc => app.model.ui.should_quit = true,
        KeyCode::Char(c) => form.push_char(c),
        _ => {}
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.model.ui.modal.as_mut() else {
        return;
    };

    match modal {
        Modal::Form(modal) => match key.code {
            KeyCode::Esc => app.model.ui.modal = None,
            KeyCode::Enter => app.submit_form(),
            KeyCode::Tab | KeyCode::Down => modal.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => modal.form.focus_prev(),
            KeyCode::Backspace => modal.form.pop_char(),
            KeyCode::Char(c) => modal.form.push_char(c),
            _ => {}
        },

        Modal::ConfirmDelete(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.model.ui.modal = None,
            _ => {}
        },

        Modal::StatusPicker(picker) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                picker.selected = prev_selection(Some(picker.selected), picker.options.len()).unwrap_or(0);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                picker.selected = next_selection(Some(picker.selected), picker.options.len()).unwrap_or(0);
            }
            KeyCode::Enter => app.confirm_status(),
            KeyCode::Esc => app.model.ui.modal = None,
            _ => {}
        },

        Modal::Detail(detail) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => detail.scroll = detail.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => detail.scroll = detail.scroll.saturating_add(1),
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.model.ui.modal = None,
            _ => {}
        },
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // 'gg' double-key
    if vim && key.code == KeyCode::Char('g') && !ctrl {
        if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
            app.model.ui.vim_command_state = VimCommandState::None;
            if let Some(page) = app.model.current_page_mut() {
                page.select_first();
            }
        } else {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        return;
    }
    app.model.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Char('f') if ctrl => app.start_search(),
        KeyCode::Char('/') => app.start_search(),

        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Char('b') => app.model.ui.sidebar.toggle(),
        KeyCode::Tab => app.navigate_relative(true),
        KeyCode::BackTab => app.navigate_relative(false),
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            app.navigate(Route::NAVIGATION[idx]);
        }
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char('R') => app.load_route(),

        KeyCode::Up => select(app, |p| p.select_prev()),
        KeyCode::Down => select(app, |p| p.select_next()),
        KeyCode::Char('k') if vim => select(app, |p| p.select_prev()),
        KeyCode::Char('j') if vim => select(app, |p| p.select_next()),
        KeyCode::Home => select(app, |p| p.select_first()),
        KeyCode::End => select(app, |p| p.select_last()),
        KeyCode::Char('G') if vim => select(app, |p| p.select_last()),

        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('s') => app.open_status_picker(),
        KeyCode::Char('a') => app.open_assign_engineer(),
        KeyCode::Char('n') => app.open_create_form(),
        KeyCode::Char('e') => app.open_edit_form(),
        KeyCode::Char('d') => app.open_delete_confirm(),

        KeyCode::Char('f') => app.cycle_exact_filter(0),
        KeyCode::Char('F') => app.cycle_exact_filter(1),
        KeyCode::Char('c') => app.clear_filters(),

        KeyCode::Char('r') if app.model.current_page_kind() == Some(PageKind::Users) => {
            app.cycle_user_role()
        }
        KeyCode::Char(']') if app.model.current_page_kind() == Some(PageKind::Users) => {
            app.next_users_page()
        }
        KeyCode::Char('[') if app.model.current_page_kind() == Some(PageKind::Users) => {
            app.prev_users_page()
        }
        _ => {}
    }
}

fn select(app: &mut App, step: impl FnOnce(&mut dyn rackdesk::model::ListView)) {
    if let Some(page) = app.model.current_page_mut() {
        step(page);
    }
}
