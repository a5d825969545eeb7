//! Plain-text rendering of lookup results for the terminal.

use octoscope_core::ThemeChoice;
use octoscope_github::{Detail, LookupError, ProfileCard};
use owo_colors::{OwoColorize, Style};

/// Text styles for one theme.
struct Styles {
    name: Style,
    handle: Style,
    muted: Style,
    label: Style,
    value: Style,
    link: Style,
    error: Style,
}

impl Styles {
    fn for_theme(theme: ThemeChoice) -> Self {
        match theme {
            ThemeChoice::Dark => Self {
                name: Style::new().bold().bright_white(),
                handle: Style::new().bright_blue(),
                muted: Style::new().dimmed(),
                label: Style::new().bright_black(),
                value: Style::new().bold().bright_white(),
                link: Style::new().underline().bright_cyan(),
                error: Style::new().bold().bright_red(),
            },
            ThemeChoice::Light => Self {
                name: Style::new().bold().black(),
                handle: Style::new().blue(),
                muted: Style::new().dimmed(),
                label: Style::new().bright_black(),
                value: Style::new().bold().black(),
                link: Style::new().underline().blue(),
                error: Style::new().bold().red(),
            },
        }
    }
}

/// Applies styles only when colour output is wanted.
struct Painter {
    styles: Styles,
    color: bool,
}

impl Painter {
    fn paint(&self, text: &str, pick: impl Fn(&Styles) -> Style) -> String {
        if self.color {
            text.style(pick(&self.styles)).to_string()
        } else {
            text.to_string()
        }
    }
}

fn detail_row(painter: &Painter, label: &str, detail: &Detail) -> String {
    let text = match detail {
        Detail::Available { url: Some(url), text } if url != text => {
            format!(
                "{} {}",
                painter.paint(text, |s| s.value),
                painter.paint(&format!("<{url}>"), |s| s.link)
            )
        }
        Detail::Available { text, .. } => painter.paint(text, |s| s.value),
        Detail::NotAvailable => painter.paint(detail.text(), |s| s.muted),
    };
    format!("  {} {}", painter.paint(&format!("{label:<9}"), |s| s.label), text)
}

/// Render a profile card.
pub fn render_card(card: &ProfileCard, theme: ThemeChoice, color: bool) -> String {
    let p = Painter {
        styles: Styles::for_theme(theme),
        color,
    };

    let bio = if card.has_bio {
        card.bio.clone()
    } else {
        p.paint(&card.bio, |s| s.muted)
    };

    let stat = |label: &str, value: u64| {
        format!(
            "{} {}",
            p.paint(label, |s| s.label),
            p.paint(&value.to_string(), |s| s.value)
        )
    };

    let lines = [
        p.paint(&card.display_name, |s| s.name),
        format!(
            "{}  {}",
            p.paint(&card.handle, |s| s.handle),
            p.paint(&card.joined, |s| s.muted)
        ),
        String::new(),
        bio,
        String::new(),
        format!(
            "  {}   {}   {}",
            stat("Repos", card.repos),
            stat("Followers", card.followers),
            stat("Following", card.following)
        ),
        String::new(),
        detail_row(&p, "Location", &card.location),
        detail_row(&p, "Twitter", &card.twitter),
        detail_row(&p, "Website", &card.blog),
        detail_row(&p, "Company", &card.company),
        format!(
            "  {} {}",
            p.paint(&format!("{:<9}", "Avatar"), |s| s.label),
            p.paint(&card.avatar_url, |s| s.link)
        ),
        String::new(),
        p.paint(&card.page_url, |s| s.link),
    ];
    lines.join("\n")
}

/// Render a lookup failure as title plus message.
pub fn render_error(err: &LookupError, theme: ThemeChoice, color: bool) -> String {
    let p = Painter {
        styles: Styles::for_theme(theme),
        color,
    };
    format!("{}\n{}", p.paint(&err.title(), |s| s.error), err.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use octoscope_github::Profile;

    fn card(json: &str) -> ProfileCard {
        let profile: Profile = serde_json::from_str(json).unwrap();
        ProfileCard::from(&profile)
    }

    #[test]
    fn plain_card_shows_fallbacks() {
        let out = render_card(
            &card(r#"{"login":"octocat","avatar_url":"u","created_at":"2011-01-25T18:44:36Z","public_repos":2,"followers":3,"following":1}"#),
            ThemeChoice::Light,
            false,
        );

        assert!(out.starts_with("octocat\n@octocat  Joined 25 Jan 2011\n"));
        assert!(out.contains("This profile has no bio"));
        assert!(out.contains("Repos 2   Followers 3   Following 1"));
        assert_eq!(out.matches("Not available").count(), 4);
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn links_are_shown_next_to_text() {
        let out = render_card(
            &card(r#"{"login":"octocat","avatar_url":"https://avatars.example/u/1","twitter_username":"github","blog":"https://github.blog","company":"@github"}"#),
            ThemeChoice::Dark,
            false,
        );

        assert!(out.contains("@github <https://twitter.com/github>"));
        assert!(out.contains("Website   https://github.blog\n"));
        assert!(out.contains("@github <https://github.com/github>"));
        assert!(out.contains("Avatar    https://avatars.example/u/1\n"));
    }

    #[test]
    fn colour_output_uses_escape_codes() {
        let out = render_error(&LookupError::NotFound, ThemeChoice::Dark, true);
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("No results found!"));

        let plain = render_error(&LookupError::UnexpectedStatus(418), ThemeChoice::Dark, false);
        assert_eq!(
            plain,
            "Something went wrong\nUnexpected error (418). Please try again."
        );
    }
}
