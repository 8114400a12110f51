use ratatui::layout::{Constraint, Direction, Layout, Rect};

use rackdesk::logic::layout::SIDEBAR_WIDTH;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top bar area
    pub system_area: Rect,
    /// Navigation sidebar (if open)
    pub sidebar_area: Option<Rect>,
    /// Page content
    pub content_area: Rect,
    /// Search input area (if visible)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    sidebar_open: bool,
    search_visible: bool,
    legend_height: u16,
) -> LayoutInfo {
    let search_height = if search_visible { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Top bar
            Constraint::Min(3),                // Sidebar + content
            Constraint::Length(search_height), // Search input (hidden when 0)
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let body = main_chunks[1];

    // Leave the page at least as wide as the sidebar
    let (sidebar_area, content_area) = if sidebar_open && body.width >= SIDEBAR_WIDTH * 2 {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(SIDEBAR_WIDTH)])
            .split(body);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, body)
    };

    LayoutInfo {
        system_area: main_chunks[0],
        sidebar_area,
        content_area,
        search_area: search_visible.then_some(main_chunks[2]),
        legend_area: main_chunks[3],
        status_area: main_chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_column_when_open() {
        let info = calculate_layout(Rect::new(0, 0, 120, 40), true, false, 3);
        let sidebar = info.sidebar_area.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(info.content_area.width, 120 - SIDEBAR_WIDTH);
        assert!(info.search_area.is_none());
    }

    #[test]
    fn test_content_takes_full_width_when_closed() {
        let info = calculate_layout(Rect::new(0, 0, 120, 40), false, true, 4);
        assert!(info.sidebar_area.is_none());
        assert_eq!(info.content_area.width, 120);
        assert_eq!(info.search_area.map(|a| a.height), Some(3));
        assert_eq!(info.legend_area.height, 4);
    }

    #[test]
    fn test_open_sidebar_hidden_on_very_narrow_terminal() {
        let info = calculate_layout(Rect::new(0, 0, 40, 30), true, false, 3);
        assert!(info.sidebar_area.is_none());
    }
}
