//! Task board: four status columns.

use crate::state::App;
use crate::theme::priority_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use taskboard_core::{BoardView, Task};

fn card(task: &Task, app: &App) -> ListItem<'static> {
    let owner = if task.task_owner.is_empty() {
        String::new()
    } else {
        format!(" @{}", task.task_owner)
    };
    ListItem::new(vec![
        Line::from(Span::styled(
            task.task_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                task.priority.to_string(),
                Style::default().fg(priority_color(&task.priority, &app.theme)),
            ),
            Span::styled(
                format!(" {}{}", task.end_date, owner),
                Style::default().fg(app.theme.text_dim),
            ),
        ]),
    ])
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let board = BoardView::build(&app.snapshot().tasks);

    let (columns_area, unplaced_area) = if board.unplaced.is_empty() {
        (area, None)
    } else {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);
        (split[0], Some(split[1]))
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(columns_area);

    for view in &board.columns {
        let focused = view.column == app.board.column;
        let items: Vec<ListItem> = view.cards.iter().map(|t| card(t, app)).collect();
        let mut state = ListState::default();
        if focused && !items.is_empty() {
            state.select(Some(app.board.row));
        }
        let border = if focused {
            app.theme.border_focus
        } else {
            app.theme.border
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("{} ({})", view.column.title(), view.cards.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .highlight_style(Style::default().bg(app.theme.bg_highlight));
        f.render_stateful_widget(list, columns[view.column.index()], &mut state);
    }

    if let Some(area) = unplaced_area {
        let names: Vec<String> = board
            .unplaced
            .iter()
            .map(|t| format!("{} ({})", t.task_no, t.task_status))
            .collect();
        let notice = Paragraph::new(format!("Not on the board: {}", names.join(", ")))
            .style(Style::default().fg(app.theme.warning))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(notice, area);
    }
}
