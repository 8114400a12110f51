use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use rackdesk::logic::forms::FormState;

/// Lines for a form: one label/value row per field, then the inline error
pub fn form_lines(form: &FormState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focused;
        let marker = if field.required { "*" } else { " " };
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(format!("{:>10}{} ", field.label, marker), label_style),
            Span::raw(field.display_value()),
        ];
        if focused {
            spans.push(Span::styled(
                "█",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))));
    } else if form.submitting {
        lines.push(Line::from(Span::styled("Submitting...", Style::default().fg(Color::Yellow))));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab: next field  Enter: submit  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

/// Render the sign-in screen centered in `area`
pub fn render_login(f: &mut Frame, area: Rect, form: &FormState, base_url: &str) {
    let width = 60.min(area.width);
    let height = 10.min(area.height);
    let dialog = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut lines = vec![
        Line::from(Span::styled(base_url.to_string(), Style::default().fg(Color::DarkGray))),
        Line::from(""),
    ];
    lines.extend(form_lines(form));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", form.title))
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, dialog);
    f.render_widget(paragraph, dialog);
}
