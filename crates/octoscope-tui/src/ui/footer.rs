//! Footer / status bar rendering.

use crate::state::AppState;
use crate::ui::theme::ThemeContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &ThemeContext) {
    let p = theme.palette;
    let key = |k: &'static str| Span::styled(k, Style::default().fg(p.primary));
    let hint = |h: &'static str| Span::styled(h, Style::default().fg(p.text_secondary));

    let mut spans = vec![
        key("Enter:"),
        hint(" search  "),
        key("Ctrl+T:"),
        hint(" theme  "),
    ];

    if app.current_profile_url().is_some() {
        spans.extend(vec![key("Ctrl+O:"), hint(" open profile  ")]);
    }

    spans.extend(vec![
        key("F1:"),
        hint(" help  "),
        key("Esc:"),
        hint(" clear  "),
        key("Ctrl+C:"),
        hint(" quit"),
    ]);

    if app.profile.no_results {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "No results",
            Style::default().fg(p.error).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(msg) = &app.status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            msg.as_str(),
            Style::default().fg(p.warning).add_modifier(Modifier::BOLD),
        ));
    }

    let hints = Paragraph::new(Line::from(spans)).style(Style::default().bg(p.surface));
    f.render_widget(hints, area);
}
