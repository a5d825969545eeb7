//! UI components and rendering.
//!
//! Every widget receives the [`ThemeContext`] explicitly; nothing reads the
//! active theme from global state.

pub mod footer;
pub mod header;
pub mod help;
pub mod profile;
pub mod search_input;
pub mod theme;

use crate::state::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};
pub use theme::ThemeContext;

/// Draw one frame.
pub fn render(f: &mut Frame, app: &AppState) {
    let theme = app.theme();

    f.render_widget(
        Block::default().style(Style::default().bg(theme.palette.bg)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Profile
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    header::render(f, chunks[0], theme);
    search_input::render(f, chunks[1], app, theme);
    profile::render(f, chunks[2], &app.profile, theme);
    footer::render(f, chunks[3], app, theme);

    if app.mode == AppMode::Help {
        help::render(f, theme);
    }
}
