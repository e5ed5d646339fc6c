//! View rendering dispatch.

pub mod board;
pub mod dashboard;
pub mod form;
pub mod projects;
pub mod table;
pub mod team;

use crate::nav::View;
use crate::state::App;
use crate::theme::notification_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg).fg(app.theme.text)),
        f.size(),
    );

    render_header(f, app, layout[0]);

    match app.active_view {
        View::Dashboard => dashboard::render(f, app, layout[1]),
        View::Board => board::render(f, app, layout[1]),
        View::Table => table::render(f, app, layout[1]),
        View::Projects => projects::render(f, app, layout[1]),
        View::Team => team::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if let Some(state) = &app.form {
        form::render_form(f, app, state);
    }
    if let Some(token) = &app.pending_delete {
        form::render_confirm(f, app, token);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<Line> = View::all()
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();

    let mut status = Vec::new();
    if app.loading {
        status.push("loading");
    }
    if app.generating {
        status.push("generating");
    }
    if app.suggesting {
        status.push("suggesting");
    }
    let stale = app.coordinator.cache().stale_collections();
    let title = if status.is_empty() && stale.is_empty() {
        "Taskboard".to_string()
    } else if stale.is_empty() {
        format!("Taskboard ({})", status.join(", "))
    } else {
        let names: Vec<&str> = stale.iter().map(|c| c.sheet_name()).collect();
        format!("Taskboard ({}) [stale: {}]", status.join(", "), names.join(", "))
    };

    let tabs = Tabs::new(titles)
        .select(app.active_view.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(Span::styled(title, Style::default().fg(app.theme.primary))),
        )
        .style(Style::default().fg(app.theme.text_dim))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn help_for(view: View) -> &'static str {
    match view {
        View::Dashboard => "j/k select • v switch list • e edit • n new task • Tab view • t theme • r refresh • q quit",
        View::Board => "←/→ column • j/k card • h/l move card • n new • e edit • d delete • s suggest • q quit",
        View::Table => "j/k row • ←/→ filter • f cycle filter • c clear • n new • e edit • d delete • q quit",
        View::Projects => "j/k select • n new • e edit • d delete • g generate tasks • q quit",
        View::Team => "j/k select • n new • e edit • d delete • q quit",
    }
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (text, style) = match app.notifications.latest() {
        Some(note) => (
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        ),
        None => (
            help_for(app.active_view).to_string(),
            Style::default().fg(app.theme.text_dim),
        ),
    };
    let footer = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(style);
    f.render_widget(footer, area);
}

/// A rectangle of `percent_x` by `height` rows centred in `area`.
pub(crate) fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x.min(100)) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
