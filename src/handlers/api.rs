//! API Response Handler
//!
//! Applies results from the background worker to the model. A failed
//! fetch is never fatal: the page keeps whatever rows it had and a toast
//! names the failure.

use rackdesk::logic::errors::{failure_toast, format_error_message};
use rackdesk::logic::pages::PageKind;
use rackdesk::model::ListPage;

use crate::services::api::ApiResponse;
use crate::App;

/// Handle API response from background service
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::LoginResult { result } => app.finish_login(result),

        ApiResponse::UsersResult { page, result } => {
            if page != app.model.pages.user_query.page {
                tracing::debug!(page, current = app.model.pages.user_query.page, "late users page");
            }
            match result {
                Ok(user_page) => app.model.pages.apply_users_page(page, user_page),
                Err(e) => report_fetch_error(app, PageKind::Users, e),
            }
        }

        ApiResponse::RepairsResult { result } => {
            apply_list(app, PageKind::Repairs, result, |app| &mut app.model.pages.repairs)
        }

        ApiResponse::RacksResult { result } => {
            apply_list(app, PageKind::Racks, result, |app| &mut app.model.pages.racks)
        }

        ApiResponse::TicketsResult { result } => {
            apply_list(app, PageKind::Tickets, result, |app| &mut app.model.pages.tickets)
        }

        ApiResponse::DetailResult { kind, id, result } => app.finish_detail(kind, &id, result),

        ApiResponse::MutationResult {
            kind,
            mutation,
            result,
        } => app.finish_mutation(kind, mutation, result),
    }
}

fn apply_list<T, F>(app: &mut App, kind: PageKind, result: anyhow::Result<Vec<T>>, page: F)
where
    T: rackdesk::model::Record,
    F: FnOnce(&mut App) -> &mut ListPage<T>,
{
    match result {
        Ok(rows) => {
            tracing::debug!(page = kind.noun(), rows = rows.len(), "list loaded");
            page(app).set_records(rows);
        }
        Err(e) => report_fetch_error(app, kind, e),
    }
}

fn report_fetch_error(app: &mut App, kind: PageKind, error: anyhow::Error) {
    tracing::warn!(page = kind.noun(), error = %error, "fetch failed");

    let action = format!("Failed to fetch {}", kind.noun());
    app.model
        .pages
        .page_mut(kind)
        .set_error(format_error_message(&error));
    app.model.show_toast(failure_toast(&action, &error));
}
