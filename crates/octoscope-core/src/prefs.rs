//! Persisted string preferences.
//!
//! The store is a flat `key = "value"` TOML table. Every read goes to the
//! backing file so that values written by another octoscope process are seen.

use crate::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// A named string preference store.
pub trait PreferenceStore {
    /// Read a preference. `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a preference, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed preference store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the octoscope directory.
    pub fn open_default() -> Self {
        Self::new(crate::paths::preferences_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        let unreadable = |e: &dyn std::fmt::Display| {
            Error::Preferences(format!("{} is not readable: {}", self.path.display(), e))
        };
        let content = String::from_utf8(bytes).map_err(|e| unreadable(&e))?;
        toml::from_str(&content).map_err(|e| unreadable(&e))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(Error::Preferences(msg)) => {
                tracing::warn!("Replacing unreadable preferences: {}", msg);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        let content =
            toml::to_string(&values).map_err(|e| Error::Preferences(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a crash never leaves a half-written file.
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory preference store.
///
/// Can be made to fail reads or writes, which is how callers exercise their
/// degraded paths without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Every `get` fails.
    pub fn unreadable(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every `set` fails.
    pub fn read_only(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Peek at a stored value, bypassing the failure switches.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(Error::Preferences("store is unavailable".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Preferences("store is read-only".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
