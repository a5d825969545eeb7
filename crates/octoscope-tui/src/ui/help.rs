//! Help overlay.

use crate::ui::theme::ThemeContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, theme: &ThemeContext) {
    let p = theme.palette;
    let help_text = [
        "octoscope - GitHub profile lookup",
        "",
        "Search:",
        "  type          Edit the username",
        "  ← / →         Move the cursor",
        "  Home / End    Jump to start / end",
        "  Enter         Look up the user",
        "  Esc           Clear the input",
        "",
        "Other:",
        "  Ctrl+T        Switch light/dark theme",
        "  Ctrl+O        Open the profile in a browser",
        "  F1            Toggle this help",
        "  Ctrl+C        Quit",
        "",
        "Press Esc to close this help",
    ];

    let help = Paragraph::new(help_text.join("\n"))
        .style(Style::default().fg(p.text_primary).bg(p.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.primary))
                .title(" Help "),
        );

    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Helper to create centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
