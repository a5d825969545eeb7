//! Search input rendering.

use crate::state::AppState;
use crate::ui::theme::ThemeContext;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PROMPT: &str = "Search GitHub username: ";

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &ThemeContext) {
    let p = theme.palette;
    let query = &app.search.query;
    let is_focused = app.mode == crate::state::AppMode::Search;

    let border_style = if is_focused {
        Style::default().fg(p.border_focus)
    } else {
        Style::default().fg(p.border_dim)
    };

    let mut spans = vec![
        Span::styled(PROMPT, Style::default().fg(p.accent)),
        Span::styled(query.as_str(), Style::default().fg(p.text_primary)),
    ];
    if query.is_empty() {
        spans.push(Span::styled(
            "e.g. octocat",
            Style::default().fg(p.text_muted),
        ));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(p.elevated)),
    );

    f.render_widget(input, area);

    if is_focused {
        let x = cursor_x(area, app.search.cursor_column());
        let cursor_y = area.y.saturating_add(1);
        f.set_cursor_position((x, cursor_y));
    }
}

/// Column for the cursor: border + prompt + query width, kept inside the box.
fn cursor_x(area: Rect, column: usize) -> u16 {
    let offset = PROMPT
        .len()
        .saturating_add(column)
        .saturating_add(1)
        .min(u16::MAX as usize) as u16;
    let last_inner = area
        .x
        .saturating_add(area.width.saturating_sub(2))
        .max(area.x);
    area.x.saturating_add(offset).min(last_inner)
}
