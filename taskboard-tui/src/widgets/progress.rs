//! Project progress bar.
//!
//! Progress is not stored in the sheet. A completed project shows 100%;
//! any other project shows a random value between 20% and 80%, drawn again
//! for every frame.

use rand::Rng;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};
use taskboard_core::Project;

pub const MIN_SIMULATED: u16 = 20;
pub const MAX_SIMULATED: u16 = 80;

pub fn simulated_progress<R: Rng + ?Sized>(project: &Project, rng: &mut R) -> u16 {
    if project.is_completed() {
        100
    } else {
        rng.random_range(MIN_SIMULATED..=MAX_SIMULATED)
    }
}

/// Progress for the frame being drawn.
pub fn frame_progress(project: &Project) -> u16 {
    simulated_progress(project, &mut rand::rng())
}

pub struct ProgressBar {
    pub title: String,
    pub percent: u16,
    /// Below this the bar uses `low_style`.
    pub threshold: u16,
    pub low_style: Style,
    pub high_style: Style,
}

impl ProgressBar {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let percent = self.percent.min(100);
        let style = if percent < self.threshold {
            self.low_style
        } else {
            self.high_style
        };

        let gauge = Gauge::default()
            .block(Block::default().title(self.title.as_str()).borders(Borders::ALL))
            .gauge_style(style)
            .percent(percent);
        f.render_widget(gauge, area);
    }
}
