use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use rackdesk::logic::navigation::page_count;
use rackdesk::model::{ListView, UserQuery};

/// Text for the bottom status bar (extracted for testability)
///
/// `users` carries the server-side paging state when the users page is shown.
pub fn build_status_line(route_path: &str, page: Option<&dyn ListView>, users: Option<&UserQuery>) -> String {
    let mut parts = vec![route_path.to_string()];

    if let Some(page) = page {
        parts.push(format!(
            "showing {} of {} {}",
            page.visible_count(),
            page.record_count(),
            page.kind().noun()
        ));

        for spec in page.kind().filters() {
            let value = page.filter().exact_value(spec.field);
            parts.push(format!("{}: {}", spec.label, value));
        }

        if let Some(query) = users {
            let pages = query
                .total
                .map(|total| page_count(total, query.limit).to_string())
                .unwrap_or_else(|| "?".to_string());
            parts.push(format!("Role: {}", query.role));
            parts.push(format!("page {} of {}", query.page, pages));
        }

        if page.is_loading() {
            parts.push("loading…".to_string());
        }
    }

    parts.join(" │ ")
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    route_path: &str,
    page: Option<&dyn ListView>,
    users: Option<&UserQuery>,
) {
    let mut spans = vec![Span::raw(build_status_line(route_path, page, users))];

    if let Some(error) = page.and_then(|p| p.error()) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(format!("last error: {}", error), Style::default().fg(Color::Red)));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rackdesk::api::RackSlot;
    use rackdesk::logic::pages::PageKind;
    use rackdesk::model::ListPage;

    fn slot(rack: &str, status: &str) -> RackSlot {
        RackSlot {
            rack: Some(rack.to_string()),
            status: Some(status.to_string()),
            ..RackSlot::default()
        }
    }

    #[test]
    fn test_dashboard_shows_path_only() {
        assert_eq!(build_status_line("/admin/dashboard", None, None), "/admin/dashboard");
    }

    #[test]
    fn test_counts_reflect_filters() {
        let mut page = ListPage::new(PageKind::Racks);
        page.set_records(vec![slot("A", "Occupied"), slot("B", "Available")]);
        page.filter.set_exact("status", "Available");

        let line = build_status_line("/admin/rack-abc", Some(&page), None);
        assert!(line.contains("showing 1 of 2 rack slots"), "got: {}", line);
        assert!(line.contains("Status: Available"), "got: {}", line);
    }

    #[test]
    fn test_users_paging_shown() {
        let page = ListPage::<rackdesk::api::User>::new(PageKind::Users);
        let mut query = UserQuery::new(10);
        query.total = Some(25);
        query.page = 2;

        let line = build_status_line("/admin/users", Some(&page), Some(&query));
        assert!(line.contains("page 2 of 3"), "got: {}", line);
        assert!(line.contains("Role: All"), "got: {}", line);
    }
}
