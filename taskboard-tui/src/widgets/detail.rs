//! Detail panel widget for showing the columns of one record.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use taskboard_core::{Project, Task, TeamMember};

pub struct DetailPanel<'a> {
    pub title: &'a str,
    pub fields: Vec<(&'static str, String)>,
    pub label_style: Style,
    pub border_style: Style,
}

impl<'a> DetailPanel<'a> {
    pub fn new(title: &'a str, fields: Vec<(&'static str, String)>) -> Self {
        Self {
            title,
            fields,
            label_style: Style::default(),
            border_style: Style::default(),
        }
    }

    pub fn styled(mut self, label_style: Style, border_style: Style) -> Self {
        self.label_style = label_style;
        self.border_style = border_style;
        self
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = if self.fields.is_empty() {
            vec![Line::from(Span::styled("Nothing selected", self.label_style))]
        } else {
            self.fields
                .iter()
                .map(|(label, value)| {
                    Line::from(vec![
                        Span::styled(format!("{}: ", label), self.label_style),
                        Span::raw(display_or_dash(value)),
                    ])
                })
                .collect()
        };

        let widget = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}

fn display_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

pub fn task_fields(task: &Task) -> Vec<(&'static str, String)> {
    vec![
        ("Task No", task.task_no.clone()),
        ("Name", task.task_name.clone()),
        ("Project", task.project.clone()),
        ("Priority", task.priority.to_string()),
        ("Status", task.task_status.to_string()),
        ("Start", task.start_date.clone()),
        ("Due", task.end_date.clone()),
        ("Owner", task.task_owner.clone()),
        ("Notes", task.notes.clone()),
    ]
}

pub fn project_fields(project: &Project, progress: Option<u16>) -> Vec<(&'static str, String)> {
    vec![
        ("Project", project.project_name.clone()),
        ("Status", project.status.to_string()),
        ("Timeline", project.timeline.clone()),
        ("Team", project.team_members.clone()),
        (
            "Progress",
            progress.map(|p| format!("{}%", p)).unwrap_or_default(),
        ),
        ("Description", project.description.clone()),
    ]
}

pub fn member_fields(member: &TeamMember) -> Vec<(&'static str, String)> {
    vec![
        ("Name", member.full_name.clone()),
        ("Role", member.role.clone()),
        ("Email", member.email.clone()),
    ]
}
