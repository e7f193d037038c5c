// src/commands/new.rs

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use super::{PluginContext, commons};
use crate::host::{ExecRequest, Host};

/// Capability an interpreter must import for built-in environment creation.
const VENV_CAPABILITY: &str = "venv";

/// Creates a virtualenv with the configured external tool and activates it.
///
/// Prompts for the destination path, then for the interpreter; skipping the
/// interpreter selection leaves the tool's own default in charge.
pub fn handle(
    host: &mut dyn Host,
    context: &mut PluginContext<'_>,
    _args: Vec<String>,
) -> Result<()> {
    let Some(destination) = prompt_destination(host, context)? else {
        return Ok(());
    };

    let pythons = commons::find_python_items(&context.settings, &[]);
    let labels: Vec<String> = pythons.iter().map(|(label, _)| label.clone()).collect();
    let selection = host.quick_panel(&labels)?;

    let mut cmd = context.settings.virtualenv_exec().ok_or_else(|| {
        anyhow!(
            "The 'executable' setting is not a valid command line: '{}'",
            context.settings.executable
        )
    })?;
    if let Some(index) = selection {
        if let Some((_, python)) = pythons.get(index) {
            cmd.push("-p".to_string());
            cmd.push(python.display().to_string());
        }
    }
    cmd.push(destination.display().to_string());

    host.run_command(ExecRequest {
        cmd,
        ..ExecRequest::default()
    })?;
    commons::set_virtualenv(host, Some(&destination))
}

/// Creates a virtualenv with `python -m venv`.
///
/// Only interpreters that can import the `venv` module are offered, and one
/// must be selected; there is no external tool to fall back to.
pub fn handle_builtin(
    host: &mut dyn Host,
    context: &mut PluginContext<'_>,
    _args: Vec<String>,
) -> Result<()> {
    let Some(destination) = prompt_destination(host, context)? else {
        return Ok(());
    };

    let pythons = commons::find_python_items(&context.settings, &[VENV_CAPABILITY.to_string()]);
    if pythons.is_empty() {
        host.error_message("No python with the venv module was found.");
        return Ok(());
    }
    let labels: Vec<String> = pythons.iter().map(|(label, _)| label.clone()).collect();
    let Some(index) = host.quick_panel(&labels)? else {
        return Ok(());
    };
    let Some((_, python)) = pythons.get(index) else {
        return Ok(());
    };

    let cmd = vec![
        python.display().to_string(),
        "-m".to_string(),
        "venv".to_string(),
        destination.display().to_string(),
    ];
    host.run_command(ExecRequest {
        cmd,
        ..ExecRequest::default()
    })?;
    commons::set_virtualenv(host, Some(&destination))
}

/// Asks for the new environment's path, defaulting into the first configured
/// directory. `None` when the user cancels.
fn prompt_destination(
    host: &mut dyn Host,
    context: &PluginContext<'_>,
) -> Result<Option<PathBuf>> {
    let default = context
        .settings
        .expanded_virtualenv_directories()
        .first()
        .map(|dir| format!("{}{}", dir.display(), std::path::MAIN_SEPARATOR))
        .unwrap_or_default();
    let Some(input) = host.input_panel("Virtualenv path:", &default)? else {
        return Ok(None);
    };
    Ok(Some(PathBuf::from(
        shellexpand::tilde(input.trim()).into_owned(),
    )))
}
