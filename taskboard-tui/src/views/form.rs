//! Form and confirmation overlays.

use super::centered;
use crate::coordinator::PendingDelete;
use crate::state::{App, EditForm, FormState};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_form(f: &mut Frame<'_>, app: &App, state: &FormState) {
    let fields = state.form.fields();
    let height = fields.len() as u16 + 5;
    let area = centered(f.size(), 70, height);

    let mut lines: Vec<Line> = fields
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = fields.value(i).unwrap_or_default();
            let focused = i == state.field;
            let label_style = if focused {
                Style::default()
                    .fg(app.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.secondary)
            };
            let value_span = if state.is_locked(i) {
                Span::styled(value.to_string(), Style::default().fg(app.theme.text_dim))
            } else {
                let cursor = if focused { "▏" } else { "" };
                Span::raw(format!("{}{}", value, cursor))
            };
            Line::from(vec![
                Span::styled(format!("{:>13}: ", label), label_style),
                value_span,
            ])
        })
        .collect();

    lines.push(Line::from(""));
    let hint = match state.form {
        EditForm::Task(_) => "Enter save • Esc cancel • Tab next • Ctrl+S suggest sub-tasks",
        EditForm::Project(_) => "Enter save • Esc cancel • Tab next • Ctrl+G generate tasks",
        EditForm::Member(_) => "Enter save • Esc cancel • Tab next",
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(app.theme.text_dim),
    )));

    let widget = Paragraph::new(lines)
        .style(Style::default().bg(app.theme.bg).fg(app.theme.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(state.title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}

pub fn render_confirm(f: &mut Frame<'_>, app: &App, token: &PendingDelete) {
    let area = centered(f.size(), 50, 5);
    let text = vec![
        Line::from(format!(
            "Delete {} \"{}\"?",
            token.collection().sheet_name(),
            token.key()
        )),
        Line::from(Span::styled(
            "y / Enter to delete • n / Esc to cancel",
            Style::default().fg(app.theme.text_dim),
        )),
    ];
    let widget = Paragraph::new(text)
        .style(Style::default().bg(app.theme.bg).fg(app.theme.text))
        .block(
            Block::default()
                .title("Confirm delete")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.error)),
        );
    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}
