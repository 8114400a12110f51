use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the top bar: product name, page title, API base URL, admin
pub fn render_system_bar(f: &mut Frame, area: Rect, page_title: &str, base_url: &str, admin: &str) {
    let line = Line::from(vec![
        Span::styled("rackdesk", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        Span::styled(page_title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        Span::styled(base_url.to_string(), Style::default().fg(Color::DarkGray)),
        Span::raw(" | "),
        Span::styled(format!("👤 {}", admin), Style::default().fg(Color::Green)),
    ]);

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}
