use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use rackdesk::logic::pages::PageKind;

fn key(label: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
///
/// `page` is `None` on the dashboard.
fn build_hotkey_spans(
    vim_mode: bool,
    page: Option<PageKind>,
    search_mode: bool,
    has_search_query: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if search_mode {
        hotkey_spans.extend(key("Enter", ":Keep  "));
        hotkey_spans.extend(key("Esc", ":Clear Search"));
        return hotkey_spans;
    }

    if let Some(kind) = page {
        if vim_mode {
            hotkey_spans.extend(key("j/k", ":Nav  "));
            hotkey_spans.extend(key("gg/G", ":First/Last  "));
        } else {
            hotkey_spans.extend(key("↑/↓", ":Nav  "));
        }
        hotkey_spans.extend(key("Enter", ":Details  "));

        if has_search_query {
            hotkey_spans.extend(key("Esc", ":Clear Search  "));
        } else {
            let search_key = if vim_mode { "/" } else { "^F" };
            hotkey_spans.extend(key(search_key, ":Search  "));
        }

        match kind.filters() {
            [] => {}
            [only] => hotkey_spans.extend(key("f", filter_label(only.label))),
            [first, second, ..] => {
                hotkey_spans.extend(key("f", filter_label(first.label)));
                hotkey_spans.extend(key("F", filter_label(second.label)));
            }
        }
        hotkey_spans.extend(key("c", ":Clear Filters  "));

        if kind.status_options().is_some() {
            hotkey_spans.extend(key("s", ":Status  "));
        }
        if kind == PageKind::Repairs {
            hotkey_spans.extend(key("a", ":Assign  "));
        }
        if kind.supports_create() {
            hotkey_spans.extend(key("n", ":New  "));
        }
        if kind == PageKind::Users {
            hotkey_spans.extend(key("e", ":Edit  "));
            hotkey_spans.extend(key("r", ":Role  "));
            hotkey_spans.extend(key("[/]", ":Page  "));
        }
        if kind.supports_delete() {
            hotkey_spans.extend(key("d", ":Delete  "));
        }
    }

    hotkey_spans.extend(key("Tab/1-5", ":Pages  "));
    hotkey_spans.extend(key("b", ":Sidebar  "));
    hotkey_spans.extend(key("R", ":Refresh  "));
    hotkey_spans.extend(key("L", ":Sign Out  "));
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

fn filter_label(label: &'static str) -> &'static str {
    match label {
        "Status" => ":Status Filter  ",
        "KYC" => ":KYC Filter  ",
        "Priority" => ":Priority Filter  ",
        _ => ":Filter  ",
    }
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    vim_mode: bool,
    page: Option<PageKind>,
    search_mode: bool,
    has_search_query: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, page, search_mode, has_search_query));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    page: Option<PageKind>,
    search_mode: bool,
    has_search_query: bool,
) {
    let legend = build_legend_paragraph(vim_mode, page, search_mode, has_search_query);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    page: Option<PageKind>,
    search_mode: bool,
    has_search_query: bool,
) -> u16 {
    // Count lines without the block; line_count() ignores borders
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, page, search_mode, has_search_query));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}
