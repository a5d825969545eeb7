//! octoscope-core: Configuration, logging, preferences and theme state for octoscope.

pub mod build_info;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod prefs;
pub mod theme;

pub use config::Config;
pub use error::{Error, Result};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use theme::{SystemHint, ThemeChoice, ThemePreference, ThemeSource};
