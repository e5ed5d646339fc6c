//! Dashboard view: four count cards and a drill-down list.

use crate::state::App;
use crate::theme::{priority_color, project_status_color};
use crate::widgets::{DetailPanel, StatCard};
use crate::widgets::detail::{project_fields, task_fields};
use crate::widgets::progress::frame_progress;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use taskboard_core::dashboard::active_projects;
use taskboard_core::{DashboardList, DashboardSummary};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let summary = DashboardSummary::compute(snapshot, App::today());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(rows[0]);

    let list = app.dashboard.list;
    let stats = [
        ("Today's Tasks", summary.today_tasks, app.theme.info, DashboardList::Today),
        ("Critical", summary.critical_tasks, app.theme.error, DashboardList::Critical),
        ("New (To Do)", summary.new_tasks, app.theme.warning, DashboardList::New),
        (
            "Active Projects",
            summary.active_projects,
            app.theme.success,
            DashboardList::ActiveProjects,
        ),
    ];
    for (i, (title, count, color, target)) in stats.into_iter().enumerate() {
        StatCard {
            title,
            count,
            style: Style::default().fg(color),
            active: list == target,
        }
        .render(f, cards[i]);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let label_style = Style::default().fg(app.theme.secondary);
    let border_style = Style::default().fg(app.theme.border);

    let (items, fields): (Vec<ListItem>, Vec<(&'static str, String)>) =
        if list == DashboardList::ActiveProjects {
            let projects = active_projects(&snapshot.projects);
            let items = projects
                .iter()
                .map(|p| {
                    ListItem::new(Line::from(vec![
                        Span::styled("● ", Style::default().fg(project_status_color(&p.status, &app.theme))),
                        Span::raw(p.project_name.clone()),
                    ]))
                })
                .collect();
            let fields = projects
                .get(app.dashboard.selected)
                .map(|p| project_fields(p, Some(frame_progress(p))))
                .unwrap_or_default();
            (items, fields)
        } else {
            let tasks = app.dashboard_tasks();
            let items = tasks
                .iter()
                .map(|t| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("[{}] ", t.priority),
                            Style::default().fg(priority_color(&t.priority, &app.theme)),
                        ),
                        Span::raw(t.task_name.clone()),
                        Span::styled(
                            format!("  {}", t.end_date),
                            Style::default().fg(app.theme.text_dim),
                        ),
                    ]))
                })
                .collect();
            let fields = tasks
                .get(app.dashboard.selected)
                .map(|t| task_fields(t))
                .unwrap_or_default();
            (items, fields)
        };

    let empty = items.is_empty();
    let mut state = ListState::default();
    if !empty {
        state.select(Some(app.dashboard.selected));
    }
    let title = if empty {
        format!("{} (none)", list.title())
    } else {
        list.title().to_string()
    };
    let widget = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(app.theme.bg_highlight)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(widget, body[0], &mut state);

    DetailPanel::new("Details", fields)
        .styled(label_style, border_style)
        .render(f, body[1]);
}
