//! Light/dark theme preference.
//!
//! The active theme is decided once at startup (saved preference, then the
//! system hint, then light) and afterwards only changes through [`ThemePreference::toggle`]
//! or [`ThemePreference::set`], both of which write the new value back to the store.

use crate::prefs::PreferenceStore;
use std::fmt;
use std::str::FromStr;

/// Preference key holding the saved theme.
pub const THEME_KEY: &str = "theme";

/// The two supported themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeChoice {
    Dark,
    #[default]
    Light,
}

impl ThemeChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeChoice::Dark => "dark",
            ThemeChoice::Light => "light",
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            ThemeChoice::Dark => ThemeChoice::Light,
            ThemeChoice::Light => ThemeChoice::Dark,
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeChoice {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeChoice::Dark),
            "light" => Ok(ThemeChoice::Light),
            other => Err(crate::Error::Preferences(format!(
                "unknown theme {other:?} (expected \"dark\" or \"light\")"
            ))),
        }
    }
}

/// Colour-scheme hint from the OS or terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemHint {
    Dark,
    Light,
    Unknown,
}

impl SystemHint {
    /// Detect from the environment.
    ///
    /// Uses the `COLORFGBG` convention (`"<fg>;<bg>"` or `"<fg>;<x>;<bg>"`) that
    /// rxvt, Konsole, iTerm2 and others export.
    pub fn detect() -> Self {
        std::env::var("COLORFGBG")
            .map(|value| Self::from_colorfgbg(&value))
            .unwrap_or(SystemHint::Unknown)
    }

    pub fn from_colorfgbg(value: &str) -> Self {
        let Some(bg) = value.rsplit(';').next() else {
            return SystemHint::Unknown;
        };
        match bg.trim().parse::<u8>() {
            Ok(0..=6 | 8) => SystemHint::Dark,
            Ok(7 | 15) => SystemHint::Light,
            _ => SystemHint::Unknown,
        }
    }

    pub fn prefers_dark(self) -> bool {
        self == SystemHint::Dark
    }
}

/// Where the startup theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// A valid value was found in the preference store.
    Saved,
    /// Nothing usable was saved; the system hint decided.
    System,
    /// The store could not be read.
    Fallback,
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Saved => "saved",
            Self::System => "system",
            Self::Fallback => "fallback",
        })
    }
}

/// The process-wide theme state.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    current: ThemeChoice,
    source: ThemeSource,
}

impl ThemePreference {
    /// Decide the startup theme. Never fails: store errors degrade to light.
    pub fn initialize(store: &dyn PreferenceStore, hint: SystemHint) -> Self {
        let from_hint = || {
            if hint.prefers_dark() {
                ThemeChoice::Dark
            } else {
                ThemeChoice::Light
            }
        };

        let (current, source) = match store.get(THEME_KEY) {
            Ok(Some(saved)) => match saved.parse::<ThemeChoice>() {
                Ok(choice) => (choice, ThemeSource::Saved),
                Err(e) => {
                    tracing::warn!("Ignoring saved theme: {}", e);
                    (from_hint(), ThemeSource::System)
                }
            },
            Ok(None) => (from_hint(), ThemeSource::System),
            Err(e) => {
                tracing::warn!("Could not read theme preference, using light: {}", e);
                (ThemeChoice::Light, ThemeSource::Fallback)
            }
        };

        tracing::debug!(theme = %current, ?source, "Theme initialized");
        Self { current, source }
    }

    pub fn current(&self) -> ThemeChoice {
        self.current
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// Switch to the other theme and persist it.
    ///
    /// The new theme is applied even when persisting fails; the error is
    /// returned so the caller can tell the user the choice won't survive a restart.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> crate::Result<ThemeChoice> {
        self.set(self.current.inverse(), store)
    }

    /// Apply `choice` and persist it. Same failure semantics as [`Self::toggle`].
    pub fn set(
        &mut self,
        choice: ThemeChoice,
        store: &mut dyn PreferenceStore,
    ) -> crate::Result<ThemeChoice> {
        self.current = choice;
        tracing::info!(theme = %choice, "Theme changed");
        store.set(THEME_KEY, choice.as_str())?;
        Ok(choice)
    }
}
