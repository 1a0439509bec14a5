pub mod dashboard;
pub mod help;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::state::DashboardState;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    ArtifactHelp,
}

impl Screen {
    pub fn draw(&self, f: &mut Frame, state: &DashboardState) {
        match self {
            Screen::Dashboard => dashboard::draw(f, state),
            Screen::ArtifactHelp => help::draw(f),
        }
    }

    pub fn handle_key(&self, state: &mut DashboardState, key: KeyCode) -> Action {
        match self {
            Screen::Dashboard => dashboard::handle_key(state, key),
            Screen::ArtifactHelp => help::handle_key(key),
        }
    }
}
