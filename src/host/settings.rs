// src/host/settings.rs

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use thiserror::Error;

use crate::constants::SETTINGS_FILENAME;
use crate::host::SettingsStore;
use crate::models::Settings;

lazy_static! {
    static ref CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not create config directory at '{path}': {source}")]
    ConfigDirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the venvman configuration directory (`~/.config/venvman` or the
/// platform equivalent), creating it if it does not exist.
///
/// Memoized: the first call computes and caches the path, subsequent calls
/// return the cached value.
pub fn config_dir() -> Result<PathBuf, SettingsError> {
    let mut cached_path_guard = CONFIG_DIR.lock().unwrap();

    if let Some(path) = &*cached_path_guard {
        return Ok(path.clone());
    }

    let config_path = dirs::config_dir()
        .ok_or(SettingsError::ConfigDirNotFound)?
        .join("venvman");

    if !config_path.exists() {
        fs::create_dir_all(&config_path).map_err(|e| SettingsError::ConfigDirCreation {
            path: config_path.display().to_string(),
            source: e,
        })?;
    }

    *cached_path_guard = Some(config_path.clone());

    Ok(config_path)
}

/// Settings persisted as TOML in the user configuration directory. A default
/// file is written on first use so users have something to edit.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store backed by `settings.toml` in the venvman config directory.
    pub fn open_default() -> Result<Self> {
        let path = config_dir()?.join(SETTINGS_FILENAME);
        Ok(Self { path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            let defaults = Settings::default();
            self.save(&defaults)?;
            return Ok(defaults);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings at '{}'", self.path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid settings file '{}'", self.path.display()))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Could not create settings directory '{}'", parent.display())
            })?;
        }
        let toml_string = toml::to_string_pretty(settings)?;
        fs::write(&self.path, toml_string)
            .with_context(|| format!("Failed to write settings at '{}'", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_writes_a_default_file_on_first_use() {
        let dir = TempDir::new().unwrap();
        let store = FileSettingsStore::with_path(dir.path().join("settings.toml"));

        let settings = store.load().unwrap();
        assert_eq!(settings.executable, "virtualenv");
        assert!(dir.path().join("settings.toml").exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileSettingsStore::with_path(dir.path().join("settings.toml"));

        let mut settings = Settings::default();
        settings.virtualenv_directories.push("~/.virtualenvs".to_string());
        settings.clear_pythonhome = false;
        store.save(&settings).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.virtualenv_directories, vec!["~/.virtualenvs".to_string()]);
        assert!(!loaded.clear_pythonhome);
    }

    #[test]
    fn invalid_settings_file_is_an_error_not_a_reset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "executable = [not toml").unwrap();

        let store = FileSettingsStore::with_path(path);
        assert!(store.load().is_err());
    }
}
