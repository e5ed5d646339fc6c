//! Team members.

use crate::state::App;
use crate::widgets::detail::member_fields;
use crate::widgets::DetailPanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let snapshot = app.snapshot();
    let items: Vec<ListItem> = snapshot
        .members
        .iter()
        .map(|m| {
            let open = snapshot
                .tasks
                .iter()
                .filter(|t| t.task_owner == m.full_name && t.is_open())
                .count();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", m.initial()),
                    Style::default()
                        .fg(app.theme.bg)
                        .bg(app.theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {}", m.full_name)),
                Span::styled(
                    format!("  {} · {} open", m.role, open),
                    Style::default().fg(app.theme.text_dim),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.team.selected));
    }
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Team ({})", snapshot.members.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .highlight_style(Style::default().bg(app.theme.bg_highlight));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let fields = snapshot
        .members
        .get(app.team.selected)
        .map(member_fields)
        .unwrap_or_default();
    DetailPanel::new("Member", fields)
        .styled(
            Style::default().fg(app.theme.secondary),
            Style::default().fg(app.theme.border),
        )
        .render(f, chunks[1]);
}
