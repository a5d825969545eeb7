//! Theme palettes and the theme context handed to every render function.

use octoscope_core::ThemeChoice;
use ratatui::style::Color;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background & surface colors
    pub bg: Color,
    pub surface: Color,
    pub elevated: Color,

    pub primary: Color,
    pub accent: Color,

    /// Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Semantic colors
    pub warning: Color,
    pub error: Color,

    pub border_dim: Color,
    pub border_focus: Color,
}

/// Midnight: deep blue-grey surfaces with amber and cyan.
pub const DARK: Palette = Palette {
    bg: Color::Rgb(20, 29, 47),             // #141D2F
    surface: Color::Rgb(30, 42, 71),        // #1E2A47
    elevated: Color::Rgb(41, 56, 92),       // #29385C
    primary: Color::Rgb(0, 121, 255),       // #0079FF
    accent: Color::Rgb(103, 224, 227),      // #67E0E3
    text_primary: Color::Rgb(255, 255, 255),
    text_secondary: Color::Rgb(200, 206, 220),
    text_muted: Color::Rgb(130, 140, 160),
    warning: Color::Rgb(255, 193, 94),      // #FFC15E
    error: Color::Rgb(247, 70, 70),         // #F74646
    border_dim: Color::Rgb(48, 60, 90),
    border_focus: Color::Rgb(0, 121, 255),
};

/// Daylight: pale surfaces with slate text.
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(246, 248, 255),          // #F6F8FF
    surface: Color::Rgb(254, 254, 254),
    elevated: Color::Rgb(236, 240, 252),
    primary: Color::Rgb(0, 121, 255),       // #0079FF
    accent: Color::Rgb(30, 110, 170),
    text_primary: Color::Rgb(43, 52, 66),   // #2B3442
    text_secondary: Color::Rgb(75, 106, 155), // #4B6A9B
    text_muted: Color::Rgb(105, 124, 154),  // #697C9A
    warning: Color::Rgb(190, 120, 0),
    error: Color::Rgb(200, 40, 40),
    border_dim: Color::Rgb(210, 216, 232),
    border_focus: Color::Rgb(0, 121, 255),
};

/// The four detail rows that carry an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Location,
    Twitter,
    Blog,
    Company,
}

/// Glyphs for one theme; dark uses filled shapes, light uses outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IconSet {
    location: &'static str,
    twitter: &'static str,
    blog: &'static str,
    company: &'static str,
}

const DARK_ICONS: IconSet = IconSet {
    location: "◉",
    twitter: "✦",
    blog: "◆",
    company: "■",
};

const LIGHT_ICONS: IconSet = IconSet {
    location: "○",
    twitter: "✧",
    blog: "◇",
    company: "□",
};

/// Active theme as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeContext {
    pub choice: ThemeChoice,
    pub palette: &'static Palette,
    icons: &'static IconSet,
}

impl ThemeContext {
    pub fn new(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self {
                choice,
                palette: &DARK,
                icons: &DARK_ICONS,
            },
            ThemeChoice::Light => Self {
                choice,
                palette: &LIGHT,
                icons: &LIGHT_ICONS,
            },
        }
    }

    pub fn icon(&self, kind: IconKind) -> &'static str {
        match kind {
            IconKind::Location => self.icons.location,
            IconKind::Twitter => self.icons.twitter,
            IconKind::Blog => self.icons.blog,
            IconKind::Company => self.icons.company,
        }
    }

    /// The toggle advertises the theme it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self.choice {
            ThemeChoice::Dark => "LIGHT",
            ThemeChoice::Light => "DARK",
        }
    }

    /// Sun while dark is active, moon while light is active.
    pub fn toggle_icon(&self) -> &'static str {
        match self.choice {
            ThemeChoice::Dark => "☀",
            ThemeChoice::Light => "☾",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_shows_opposite_theme() {
        let dark = ThemeContext::new(ThemeChoice::Dark);
        assert_eq!(dark.toggle_label(), "LIGHT");
        assert_eq!(dark.toggle_icon(), "☀");

        let light = ThemeContext::new(ThemeChoice::Light);
        assert_eq!(light.toggle_label(), "DARK");
        assert_eq!(light.toggle_icon(), "☾");
    }

    #[test]
    fn icons_and_palette_follow_theme() {
        let dark = ThemeContext::new(ThemeChoice::Dark);
        let light = ThemeContext::new(ThemeChoice::Light);

        assert_eq!(dark.palette, &DARK);
        assert_eq!(light.palette, &LIGHT);
        for kind in [
            IconKind::Location,
            IconKind::Twitter,
            IconKind::Blog,
            IconKind::Company,
        ] {
            assert_ne!(dark.icon(kind), light.icon(kind));
        }
    }
}
