// src/commands/remove.rs

use std::fs;

use anyhow::Result;

use super::{PluginContext, commons};
use crate::host::Host;

/// Deletes a discovered environment's directory tree after confirmation.
///
/// If the deleted environment was the active one, the stored reference is
/// cleared as well. Deletion failures are logged and reported, never fatal.
pub fn handle(
    host: &mut dyn Host,
    context: &mut PluginContext<'_>,
    _args: Vec<String>,
) -> Result<()> {
    let available = commons::find_virtualenv_items(host, &context.settings);
    if available.is_empty() {
        host.error_message("No virtualenvs found in the project folders or configured directories.");
        return Ok(());
    }

    let labels: Vec<String> = available.iter().map(|(label, _)| label.clone()).collect();
    let Some(index) = host.quick_panel(&labels)? else {
        return Ok(());
    };
    let Some((_, root)) = available.get(index) else {
        return Ok(());
    };

    let message = format!(
        "Please confirm deletion of virtualenv at:\n\"{}\".",
        root.display()
    );
    if !host.ok_cancel_dialog(&message)? {
        return Ok(());
    }

    match fs::remove_dir_all(root) {
        Ok(()) => {
            log::info!("\"{}\" deleted.", root.display());
            if commons::stored_virtualenv(host).as_deref() == Some(root.as_path()) {
                commons::set_virtualenv(host, None)?;
            }
        }
        Err(error) => {
            log::error!("Could not delete \"{}\": {}", root.display(), error);
            host.error_message(&format!("Could not delete \"{}\".", root.display()));
        }
    }
    Ok(())
}
