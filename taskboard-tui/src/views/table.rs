//! Task table with project, priority and owner filters.

use crate::state::{App, FilterField};
use crate::theme::{priority_color, task_status_color};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

fn filter_value(app: &App, field: FilterField) -> String {
    let filter = &app.table.filter;
    let value = match field {
        FilterField::Project => filter.project.clone(),
        FilterField::Priority => filter.priority.as_ref().map(|p| p.to_string()),
        FilterField::Owner => filter.owner.clone(),
    };
    value.unwrap_or_else(|| "All".to_string())
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mut spans = Vec::new();
    for field in FilterField::ALL {
        let style = if field == app.table.focus {
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        spans.push(Span::styled(
            format!("{}: {}   ", field.label(), filter_value(app, field)),
            style,
        ));
    }
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Filters")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(bar, chunks[0]);

    let tasks = app.table_rows();
    let rows: Vec<Row> = tasks
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.task_no.clone()),
                Cell::from(t.task_name.clone()),
                Cell::from(t.project.clone()),
                Cell::from(Span::styled(
                    t.priority.to_string(),
                    Style::default().fg(priority_color(&t.priority, &app.theme)),
                )),
                Cell::from(Span::styled(
                    t.task_status.to_string(),
                    Style::default().fg(task_status_color(&t.task_status, &app.theme)),
                )),
                Cell::from(t.end_date.clone()),
                Cell::from(t.task_owner.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(18),
        Constraint::Percentage(30),
        Constraint::Percentage(15),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Percentage(15),
    ];
    let header = Row::new(vec!["Task No", "Name", "Project", "Priority", "Status", "Due", "Owner"])
        .style(Style::default().fg(app.theme.secondary).add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    if !tasks.is_empty() {
        state.select(Some(app.table.selected));
    }
    let title = format!("Tasks ({} of {})", tasks.len(), app.snapshot().tasks.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .highlight_style(Style::default().bg(app.theme.bg_highlight));
    f.render_stateful_widget(table, chunks[1], &mut state);
}
