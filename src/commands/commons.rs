// src/commands/commons.rs

// Shared functionality used by multiple command handlers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::{PROJECT_SETTINGS_KEY, PROJECT_VIRTUALENV_KEY, PYTHON_INTERPRETER_KEY};
use crate::core::{pythons, venvs};
use crate::host::Host;
use crate::models::{Settings, Virtualenv};

#[derive(Error, Debug)]
pub enum VirtualenvError {
    /// The stored environment no longer passes the validity check.
    #[error("Virtualenv at \"{}\" is missing, corrupt or has been deleted.", .0.display())]
    Invalid(PathBuf),
    #[error("No virtualenv is active for this project.")]
    NoneActive,
}

/// The environment root stored in project data, `~`-expanded. `None` when the
/// project has no active environment.
pub fn stored_virtualenv(host: &dyn Host) -> Option<PathBuf> {
    let data = host.project_data();
    let raw = data.get(PROJECT_VIRTUALENV_KEY)?.as_str()?.to_string();
    if raw.is_empty() {
        return None;
    }
    Some(PathBuf::from(shellexpand::tilde(&raw).into_owned()))
}

/// Like [`stored_virtualenv`], but re-checks validity on the way out.
///
/// An environment that fails the check is cleared from project data before
/// the error is returned, so the failure is not repeated silently on the next
/// action.
pub fn validated_virtualenv(host: &mut dyn Host) -> Result<Option<PathBuf>> {
    let Some(venv) = stored_virtualenv(host) else {
        return Ok(None);
    };
    if !venvs::is_virtualenv(&venv) {
        set_virtualenv(host, None)?;
        return Err(VirtualenvError::Invalid(venv).into());
    }
    Ok(Some(venv))
}

/// Updates (or clears, on `None`) the active environment in project data,
/// together with the interpreter-path convenience setting.
pub fn set_virtualenv(host: &mut dyn Host, venv: Option<&Path>) -> Result<()> {
    let mut data = match host.project_data() {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    match venv {
        Some(root) => {
            let environment = Virtualenv::new(root);
            data.insert(
                PROJECT_VIRTUALENV_KEY.to_string(),
                Value::String(root.display().to_string()),
            );
            let interpreter = environment.bin_dir().join("python");
            let settings_entry = data
                .entry(PROJECT_SETTINGS_KEY)
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(settings_map) = settings_entry {
                settings_map.insert(
                    PYTHON_INTERPRETER_KEY.to_string(),
                    Value::String(interpreter.display().to_string()),
                );
            }
            host.set_project_data(Value::Object(data))?;
            host.status_message(&format!("({}) ACTIVATED", environment.name()));
            log::info!("Current virtualenv set to \"{}\".", root.display());
        }
        None => {
            data.remove(PROJECT_VIRTUALENV_KEY);
            if let Some(Value::Object(settings_map)) = data.get_mut(PROJECT_SETTINGS_KEY) {
                settings_map.remove(PYTHON_INTERPRETER_KEY);
            }
            host.set_project_data(Value::Object(data))?;
            host.status_message("DEACTIVATED");
            log::info!("Current virtualenv cleared.");
        }
    }
    Ok(())
}

/// All known environments for this project, as (label, root) pairs ready for
/// a quick panel: host folders first, then the configured directories.
pub fn find_virtualenv_items(host: &dyn Host, settings: &Settings) -> Vec<(String, PathBuf)> {
    let mut search_dirs = host.project_folders();
    search_dirs.extend(settings.expanded_virtualenv_directories());
    venvs::find_virtualenvs(&search_dirs)
        .into_iter()
        .map(|root| (Virtualenv::new(&root).name(), root))
        .collect()
}

/// Interpreter candidates as (label, path) pairs. Labels are the full paths;
/// the system search path is used plus the configured extra directories.
pub fn find_python_items(
    settings: &Settings,
    required_capabilities: &[String],
) -> Vec<(String, PathBuf)> {
    let extra = settings.expanded_extra_paths();
    pythons::find_pythons(&[], &extra, required_capabilities)
        .into_iter()
        .map(|python| (python.display().to_string(), python))
        .collect()
}
