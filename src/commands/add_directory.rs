// src/commands/add_directory.rs

use std::path::PathBuf;

use anyhow::Result;

use super::PluginContext;
use crate::host::Host;

/// Appends a directory to the `virtualenv_directories` setting and persists
/// the settings through the host store. Non-directories are rejected with an
/// error dialog.
pub fn handle(
    host: &mut dyn Host,
    context: &mut PluginContext<'_>,
    _args: Vec<String>,
) -> Result<()> {
    let default = format!(
        "{}{}",
        shellexpand::tilde("~"),
        std::path::MAIN_SEPARATOR
    );
    let Some(input) = host.input_panel("Directory path:", &default)? else {
        return Ok(());
    };

    let directory = PathBuf::from(shellexpand::tilde(input.trim()).into_owned());
    if !directory.is_dir() {
        host.error_message(&format!("\"{}\" is not a directory.", directory.display()));
        return Ok(());
    }

    context
        .settings
        .virtualenv_directories
        .push(directory.display().to_string());
    context.settings_store.save(&context.settings)?;
    host.status_message(&format!(
        "\"{}\" added to the virtualenv directories.",
        directory.display()
    ));
    Ok(())
}
