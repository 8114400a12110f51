use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use rackdesk::model::{ConfirmDeleteState, DetailState, FormModal, StatusPickerState};

use super::login::form_lines;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, confirm: &ConfirmDeleteState) {
    let prompt_text = format!(
        "Delete this {}?\n\n\
        {}\n\n\
        WARNING: This action cannot be undone!\n\n\
        Continue? (y/n)",
        confirm.kind.singular().to_lowercase(),
        confirm.label
    );

    let prompt_area = centered(f.area(), 50, 11);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the status picker menu
pub fn render_status_picker(f: &mut Frame, picker: &StatusPickerState) {
    let menu_items: Vec<ListItem> = picker
        .options
        .iter()
        .map(|option| ListItem::new(Span::raw(*option)).style(Style::default().fg(Color::White)))
        .collect();

    let menu_height = (picker.options.len() as u16 + 2).min(20);
    let menu_area = centered(f.area(), 44, menu_height);

    let menu = List::new(menu_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} status (Enter to set, Esc to cancel) ", picker.kind.singular()))
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(Some(picker.selected));

    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(menu, menu_area, &mut state);
}

/// Render the read-only record view
pub fn render_detail(f: &mut Frame, detail: &DetailState) {
    let mut lines: Vec<Line> = detail
        .lines
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:>12}: ", label), Style::default().fg(Color::Cyan)),
                Span::raw(value.clone()),
            ])
        })
        .collect();

    if detail.loading {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Refreshing...",
            Style::default().fg(Color::Yellow),
        )));
    }

    let area = f.area();
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(4)).max(5);
    let dialog = centered(area, 70, height);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} (Esc to close) ", detail.title))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(ratatui::widgets::Wrap { trim: false })
        .scroll((detail.scroll, 0));

    f.render_widget(Clear, dialog);
    f.render_widget(paragraph, dialog);
}

/// Render a create/edit form dialog
pub fn render_form(f: &mut Frame, modal: &FormModal) {
    let lines = form_lines(&modal.form);
    let dialog = centered(f.area(), 60, lines.len() as u16 + 2);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", modal.form.title))
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, dialog);
    f.render_widget(paragraph, dialog);
}
