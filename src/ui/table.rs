use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use rackdesk::logic::formatting::truncate_to_width;
use rackdesk::model::ListView;

fn status_color(value: &str) -> Color {
    match value {
        "Active" | "Verified" | "Completed" | "Delivered" | "Resolved" | "Available" => Color::Green,
        "Pending" | "In Progress" | "Open" | "Reserved" | "QC" | "Diagnosed" | "Received" => {
            Color::Yellow
        }
        "Inactive" | "Blocked" | "Rejected" | "Cancelled" | "High" => Color::Red,
        "Occupied" | "Closed" => Color::Blue,
        _ => Color::Reset,
    }
}

/// Render the table for a list page
pub fn render_table(f: &mut Frame, area: Rect, page: &dyn ListView, title: &str) {
    let kind = page.kind();
    let columns = kind.columns();

    let suffix = if page.is_loading() { " (loading…)" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {}{} ", title, suffix));

    let rows = page.rows();
    if rows.is_empty() {
        let message = if page.is_loading() || !page.is_loaded() {
            format!("Loading {}...", kind.noun())
        } else if page.filter().is_active() {
            format!("No {} match the current filters (c to clear)", kind.noun())
        } else if let Some(error) = page.error() {
            format!("Could not load {}: {}", kind.noun(), error)
        } else {
            format!("No {} found", kind.noun())
        };
        let empty = Paragraph::new(Line::from(message))
            .block(block)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(empty, area);
        return;
    }

    // Convert percentage shares to cell widths so values can be truncated
    let inner_width = area.width.saturating_sub(4);
    let widths: Vec<u16> = columns
        .iter()
        .map(|c| (u32::from(inner_width) * u32::from(c.width) / 100) as u16)
        .collect();

    let header = Row::new(columns.iter().map(|c| Cell::from(c.header)))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let body = rows.into_iter().map(|cells| {
        Row::new(cells.into_iter().zip(columns).zip(&widths).map(|((value, col), width)| {
            let style = if col.field.ends_with("status") || col.field == "priority" {
                Style::default().fg(status_color(&value))
            } else {
                Style::default()
            };
            Cell::from(truncate_to_width(&value, usize::from(*width).saturating_sub(1))).style(style)
        }))
    });

    let table = Table::new(body, widths.iter().map(|w| Constraint::Length(*w)))
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(page.selected());
    f.render_stateful_widget(table, area, &mut state);
}
