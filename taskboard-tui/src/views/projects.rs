//! Project list with progress.

use crate::state::App;
use crate::theme::project_status_color;
use crate::widgets::detail::project_fields;
use crate::widgets::progress::frame_progress;
use crate::widgets::{DetailPanel, ProgressBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let projects = &app.snapshot().projects;
    let percents: Vec<u16> = projects.iter().map(frame_progress).collect();
    let items: Vec<ListItem> = projects
        .iter()
        .zip(&percents)
        .map(|(p, progress)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<14}", p.status.to_string()),
                    Style::default().fg(project_status_color(&p.status, &app.theme)),
                ),
                Span::raw(p.project_name.clone()),
                Span::styled(
                    format!("  {}%", progress),
                    Style::default().fg(app.theme.text_dim),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.projects.selected));
    }
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Projects ({})", projects.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .highlight_style(Style::default().bg(app.theme.bg_highlight));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(chunks[1]);

    let selected = projects.get(app.projects.selected);
    let progress = percents.get(app.projects.selected).copied();
    ProgressBar {
        title: "Progress".to_string(),
        percent: progress.unwrap_or(0),
        threshold: 50,
        low_style: Style::default().fg(app.theme.warning),
        high_style: Style::default().fg(app.theme.success),
    }
    .render(f, right[0]);

    let fields = selected
        .map(|p| project_fields(p, progress))
        .unwrap_or_default();
    DetailPanel::new("Project", fields)
        .styled(
            Style::default().fg(app.theme.secondary),
            Style::default().fg(app.theme.border),
        )
        .render(f, right[1]);
}
