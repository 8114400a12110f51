use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use rackdesk::logic::route::Route;

/// Render the navigation sidebar, highlighting the current route
pub fn render_sidebar(f: &mut Frame, area: Rect, current: Route, is_mobile: bool) {
    let items: Vec<ListItem> = Route::NAVIGATION
        .iter()
        .enumerate()
        .map(|(idx, route)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(route.title()),
            ]))
        })
        .collect();

    let title = if is_mobile { " Menu (b to hide) " } else { " Menu " };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(current.nav_index());
    f.render_stateful_widget(list, area, &mut state);
}
