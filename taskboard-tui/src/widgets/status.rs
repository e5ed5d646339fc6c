//! Dashboard count card.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatCard<'a> {
    pub title: &'a str,
    pub count: usize,
    pub style: Style,
    /// Highlighted when its drill-down list is the one shown.
    pub active: bool,
}

impl<'a> StatCard<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut border = Style::default();
        if self.active {
            border = self.style.add_modifier(Modifier::BOLD);
        }
        let paragraph = Paragraph::new(Line::from(Span::styled(
            self.count.to_string(),
            self.style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(border),
        );
        f.render_widget(paragraph, area);
    }
}
