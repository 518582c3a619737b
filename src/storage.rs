//! Settings persistence under the user's config directory.
//!
//! Backs the [`PreferenceStore`] boundary with a small JSON settings file
//! (`~/.config/glow-tour/settings.json`). A missing file is a clean
//! default; a corrupted file is treated as absent so startup never fails
//! on bad settings.

use std::fs;
use std::path::PathBuf;

use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};

use crate::theme::PreferenceStore;

/// On-disk settings shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct Settings {
    /// Theme preference flag: `system`, `light`, or `dark`.
    theme: Option<String>,
}

/// Storage errors surfaced to callers that care about the distinction.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// Get the application config directory, creating it if needed.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(StorageError::NoConfigDir)?;
    let dir = base.join("glow-tour");
    if !dir.exists() {
        fs::create_dir_all(&dir).wrap_err("Failed to create config directory")?;
    }
    Ok(dir)
}

/// File-backed preference store at a fixed settings path.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store at the default settings path for this platform.
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: config_dir()?.join("settings.json"),
        })
    }

    /// Store at an explicit path (tests use a temp directory).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_settings(&self) -> Settings {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return Settings::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring corrupt settings");
                Settings::default()
            }
        }
    }

    fn write_settings(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).wrap_err("Failed to create settings directory")?;
            }
        }
        let json =
            serde_json::to_string_pretty(settings).wrap_err("Failed to serialize settings")?;
        fs::write(&self.path, json)
            .wrap_err_with(|| format!("Failed to write settings to {:?}", self.path))?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        self.read_settings().theme
    }

    fn save(&self, value: &str) -> Result<()> {
        let mut settings = self.read_settings();
        settings.theme = Some(value.to_string());
        self.write_settings(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FilePreferenceStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FilePreferenceStore::at_path(dir.path().join("settings.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_dir, store) = temp_store();
        store.save("dark").unwrap();
        assert_eq!(store.load().as_deref(), Some("dark"));

        store.save("light").unwrap();
        assert_eq!(store.load().as_deref(), Some("light"));
    }

    #[test]
    fn test_survives_reopen() {
        let (dir, store) = temp_store();
        store.save("dark").unwrap();

        let reopened = FilePreferenceStore::at_path(dir.path().join("settings.json"));
        assert_eq!(reopened.load().as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_file_treated_as_absent() {
        let (dir, store) = temp_store();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        assert_eq!(store.load(), None);

        // Saving over a corrupt file recovers it
        store.save("light").unwrap();
        assert_eq!(store.load().as_deref(), Some("light"));
    }
}
