//! Profile region rendering: the card, a lookup error, or the idle hint.

use crate::state::{ProfileRegion, ProfileView};
use crate::ui::theme::{IconKind, ThemeContext};
use octoscope_github::{Detail, LookupError, ProfileCard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, region: &ProfileRegion, theme: &ThemeContext) {
    let p = theme.palette;

    let (border, title) = if region.loading {
        (p.accent, " PROFILE · loading… ")
    } else {
        (p.border_dim, " PROFILE ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(border)))
        .style(Style::default().bg(p.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &region.view {
        ProfileView::Empty => render_idle(f, inner, theme),
        ProfileView::Error(err) => render_error(f, inner, err, theme),
        ProfileView::Profile(card) => render_card(f, inner, card, theme),
    }
}

fn render_idle(f: &mut Frame, area: Rect, theme: &ThemeContext) {
    let text = Paragraph::new(Line::from(Span::styled(
        "Type a GitHub username and press Enter.",
        Style::default().fg(theme.palette.text_muted),
    )));
    f.render_widget(text, pad(area));
}

fn render_error(f: &mut Frame, area: Rect, err: &LookupError, theme: &ThemeContext) {
    let p = theme.palette;
    let lines = vec![
        Line::from(Span::styled(
            err.title(),
            Style::default().fg(p.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            err.message(),
            Style::default().fg(p.text_secondary),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        pad(area),
    );
}

fn render_card(f: &mut Frame, area: Rect, card: &ProfileCard, theme: &ThemeContext) {
    let p = theme.palette;
    let area = pad(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Name, handle, joined, avatar
            Constraint::Min(2),    // Bio
            Constraint::Length(3), // Stats
            Constraint::Length(2), // Links
        ])
        .split(area);

    let heading = vec![
        Line::from(Span::styled(
            card.display_name.as_str(),
            Style::default()
                .fg(p.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.handle.as_str(),
            Style::default().fg(p.primary),
        )),
        Line::from(Span::styled(
            card.joined.as_str(),
            Style::default().fg(p.text_muted),
        )),
        Line::from(vec![
            Span::styled("Avatar  ", Style::default().fg(p.text_secondary)),
            Span::styled(
                card.avatar_url.as_str(),
                Style::default()
                    .fg(p.text_muted)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(heading), chunks[0]);

    let bio_style = if card.has_bio {
        Style::default().fg(p.text_secondary)
    } else {
        Style::default()
            .fg(p.text_muted)
            .add_modifier(Modifier::ITALIC)
    };
    f.render_widget(
        Paragraph::new(Span::styled(card.bio.as_str(), bio_style)).wrap(Wrap { trim: true }),
        chunks[1],
    );

    let stat = |label: &'static str, value: u64| {
        vec![
            Span::styled(label, Style::default().fg(p.text_secondary)),
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(p.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
        ]
    };
    let mut stats = stat("Repos ", card.repos);
    stats.extend(stat("Followers ", card.followers));
    stats.extend(stat("Following ", card.following));
    f.render_widget(
        Paragraph::new(Line::from(stats)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(p.border_dim))
                .style(Style::default().bg(p.elevated)),
        ),
        chunks[2],
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(chunks[3]);
    let columns = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };
    let top = columns(rows[0]);
    let bottom = columns(rows[1]);

    f.render_widget(detail_line(theme, IconKind::Location, &card.location), top[0]);
    f.render_widget(detail_line(theme, IconKind::Twitter, &card.twitter), top[1]);
    f.render_widget(detail_line(theme, IconKind::Blog, &card.blog), bottom[0]);
    f.render_widget(detail_line(theme, IconKind::Company, &card.company), bottom[1]);
}

fn detail_line<'a>(theme: &ThemeContext, kind: IconKind, detail: &'a Detail) -> Paragraph<'a> {
    let p = theme.palette;
    let text_style = match detail {
        Detail::Available { url: Some(_), .. } => Style::default()
            .fg(p.text_primary)
            .add_modifier(Modifier::UNDERLINED),
        Detail::Available { url: None, .. } => Style::default().fg(p.text_primary),
        Detail::NotAvailable => Style::default().fg(p.text_muted),
    };
    Paragraph::new(Line::from(vec![
        Span::styled(theme.icon(kind), Style::default().fg(p.accent)),
        Span::raw("  "),
        Span::styled(detail.text(), text_style),
    ]))
}

/// Inset by one column on each side.
fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}
