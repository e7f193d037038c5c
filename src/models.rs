// src/models.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::VIRTUALENV_BINDIR;

/// A virtual environment, identified solely by its root path.
///
/// Every other attribute is derived on demand. Two values with equal roots are
/// interchangeable. Validity is deliberately not part of this type: the
/// underlying directory can vanish between checks, so callers re-run
/// [`crate::core::venvs::is_virtualenv`] whenever they need a guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Virtualenv {
    root: PathBuf,
}

impl Virtualenv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Final path component, used as the display label in selection panels.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    /// The platform-specific directory holding the environment's executables.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(VIRTUALENV_BINDIR)
    }
}

/// The computed activation state for an environment root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Binary directory prepended, separator-joined, to the prior search path.
    pub search_path: String,
    /// Single-entry overlay mapping `VIRTUAL_ENV` to the environment root.
    pub env: HashMap<String, String>,
}

/// Plugin settings, persisted by the host settings store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Command line of the environment-creation tool, shlex-split at use.
    pub executable: String,
    /// Directories scanned for virtualenvs besides the open project folders.
    pub virtualenv_directories: Vec<String>,
    /// Extra directories appended to the interpreter search path.
    pub extra_paths: Vec<String>,
    /// Drop `PYTHONHOME` from build environments when activating.
    pub clear_pythonhome: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            executable: "virtualenv".to_string(),
            virtualenv_directories: Vec::new(),
            extra_paths: Vec::new(),
            clear_pythonhome: true,
        }
    }
}

impl Settings {
    /// The creation-tool argv as specified in the settings, or `None` when the
    /// configured command line cannot be parsed.
    pub fn virtualenv_exec(&self) -> Option<Vec<String>> {
        shlex::split(&self.executable)
    }

    /// Configured environment directories with `~` expanded.
    pub fn expanded_virtualenv_directories(&self) -> Vec<PathBuf> {
        self.virtualenv_directories
            .iter()
            .map(|path| PathBuf::from(shellexpand::tilde(path).into_owned()))
            .collect()
    }

    /// Configured extra interpreter directories with `~` expanded.
    pub fn expanded_extra_paths(&self) -> Vec<PathBuf> {
        self.extra_paths
            .iter()
            .map(|path| PathBuf::from(shellexpand::tilde(path).into_owned()))
            .collect()
    }
}
