//! Common filesystem paths used by octoscope.

use std::path::PathBuf;

/// Base directory for octoscope state (config, preferences, log).
///
/// Defaults to `$XDG_CONFIG_HOME/octoscope`, then `~/.config/octoscope`, but can
/// be overridden via `OCTOSCOPE_DIR` for testing or multi-profile setups.
pub fn octoscope_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("OCTOSCOPE_DIR") {
        return PathBuf::from(dir);
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("octoscope");
        }
    }

    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".config").join("octoscope")
}

/// Path to the octoscope configuration file.
pub fn config_path() -> PathBuf {
    octoscope_dir().join("config.toml")
}

/// Path to the persisted preferences (theme choice).
pub fn preferences_path() -> PathBuf {
    octoscope_dir().join("prefs.toml")
}

/// Path to the TUI log file.
pub fn log_path() -> PathBuf {
    octoscope_dir().join("octoscope.log")
}

#[doc(hidden)]
pub fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
