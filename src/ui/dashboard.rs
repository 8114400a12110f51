use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use rackdesk::logic::pages::PageKind;
use rackdesk::model::PagesModel;

fn count_lines(pages: &PagesModel, kind: PageKind, field: &str) -> Vec<Line<'static>> {
    let page = pages.page(kind);

    if page.is_loading() && page.record_count() == 0 {
        return vec![Line::from(Span::styled("Loading...", Style::default().fg(Color::Gray)))];
    }
    if let Some(error) = page.error().filter(|_| page.record_count() == 0) {
        return vec![Line::from(Span::styled(
            format!("Unavailable: {}", error),
            Style::default().fg(Color::Red),
        ))];
    }

    let mut lines = vec![Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            page.record_count().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];
    for (value, count) in page.counts_by(field) {
        lines.push(Line::from(format!("  {:<14} {:>5}", value, count)));
    }
    lines
}

/// Render per-status counts for every list page
pub fn render_dashboard(f: &mut Frame, area: Rect, pages: &PagesModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let cards = [
        (PageKind::Repairs, "status", " Repair Orders by Status ", top[0]),
        (PageKind::Racks, "status", " Rack Slots by Status ", top[1]),
        (PageKind::Tickets, "status", " Support Tickets by Status ", bottom[0]),
        (PageKind::Users, "status", " Users (this page) by Status ", bottom[1]),
    ];

    for (kind, field, title, card_area) in cards {
        let mut lines = count_lines(pages, kind, field);
        if kind == PageKind::Users {
            if let Some(total) = pages.user_query.total {
                lines.insert(0, Line::from(format!("Registered: {}", total)));
            }
        }

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(card, card_area);
    }
}
