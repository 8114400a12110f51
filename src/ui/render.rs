use ratatui::Frame;

use rackdesk::logic::pages::PageKind;
use rackdesk::model::Modal;

use super::{dashboard, dialogs, layout, legend, login, search, sidebar, status_bar, system_bar, table, toast};
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.model;
    let route = model.ui.route;

    if !route.is_protected() {
        login::render_login(f, size, &model.session.login_form, app.base_url());
        if let Some((message, _)) = &model.ui.toast_message {
            toast::render_toast(f, size, message);
        }
        return;
    }

    let page_kind = model.current_page_kind();
    let page = model.current_page();
    let has_query = page.is_some_and(|p| !p.filter().query.is_empty());
    let search_visible = model.ui.search_mode || has_query;

    let legend_height =
        legend::calculate_legend_height(size.width, model.ui.vim_mode, page_kind, model.ui.search_mode, has_query);
    let layout_info = layout::calculate_layout(size, model.ui.sidebar.sidebar_open, search_visible, legend_height);

    system_bar::render_system_bar(
        f,
        layout_info.system_area,
        route.title(),
        app.base_url(),
        model.session.admin_label(),
    );

    if let Some(sidebar_area) = layout_info.sidebar_area {
        sidebar::render_sidebar(f, sidebar_area, route, model.ui.sidebar.is_mobile);
    }

    match page {
        Some(page) => table::render_table(f, layout_info.content_area, page, route.title()),
        None => dashboard::render_dashboard(f, layout_info.content_area, &model.pages),
    }

    if let (Some(search_area), Some(page)) = (layout_info.search_area, page) {
        search::render_search_input(
            f,
            search_area,
            &page.filter().query,
            model.ui.search_mode,
            page.visible_count(),
            page.record_count(),
        );
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        page_kind,
        model.ui.search_mode,
        has_query,
    );

    let users = (page_kind == Some(PageKind::Users)).then_some(&model.pages.user_query);
    status_bar::render_status_bar(f, layout_info.status_area, route.path(), page, users);

    match &model.ui.modal {
        Some(Modal::Detail(detail)) => dialogs::render_detail(f, detail),
        Some(Modal::StatusPicker(picker)) => dialogs::render_status_picker(f, picker),
        Some(Modal::ConfirmDelete(confirm)) => dialogs::render_delete_confirmation(f, confirm),
        Some(Modal::Form(form)) => dialogs::render_form(f, form),
        None => {}
    }

    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
