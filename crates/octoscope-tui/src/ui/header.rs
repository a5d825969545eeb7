//! Header rendering: app title, theme toggle and build info.

use crate::ui::theme::ThemeContext;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use octoscope_core::build_info::BUILD_INFO;

pub fn render(f: &mut Frame, area: Rect, theme: &ThemeContext) {
    let p = theme.palette;

    let title = Line::from(vec![
        Span::styled(
            "octoscope",
            Style::default().fg(p.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" - GitHub profile lookup", Style::default().fg(p.text_secondary)),
    ]);

    let toggle = Line::from(vec![
        Span::styled(
            theme.toggle_label(),
            Style::default()
                .fg(p.text_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(theme.toggle_icon(), Style::default().fg(p.accent)),
        Span::styled(
            format!("  {}", BUILD_INFO.compact()),
            Style::default().fg(p.text_muted).add_modifier(Modifier::DIM),
        ),
    ]);
    let toggle_width = (toggle.width() as u16).min(area.width.saturating_sub(2));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border_dim))
        .style(Style::default().bg(p.surface));
    let inner = block.inner(area);

    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(toggle_width)])
        .split(inner);

    f.render_widget(Paragraph::new(title), chunks[0]);
    f.render_widget(
        Paragraph::new(toggle).alignment(Alignment::Right),
        chunks[1],
    );
}
