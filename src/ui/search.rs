//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render search input box above legend
///
/// # Arguments
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Visible rows out of `total`
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: usize,
    total: usize,
) {
    let title = if active {
        format!(" Search ({} of {}) - Esc to cancel ", match_count, total)
    } else {
        format!(" Search ({} of {}) - Esc to clear ", match_count, total)
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Match: "),
            Span::raw(query),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Match: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    f.render_widget(Paragraph::new(vec![input_line]).block(block), area);
}
