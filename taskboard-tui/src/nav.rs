//! Navigation and view switching utilities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Board,
    Table,
    Projects,
    Team,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Board => "Board",
            View::Table => "Tasks",
            View::Projects => "Projects",
            View::Team => "Team",
        }
    }

    pub fn all() -> &'static [View] {
        &[
            View::Dashboard,
            View::Board,
            View::Table,
            View::Projects,
            View::Team,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> View {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> View {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}
