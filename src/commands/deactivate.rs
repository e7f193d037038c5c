// src/commands/deactivate.rs

use anyhow::Result;

use super::{PluginContext, commons};
use crate::host::Host;

/// Clears the active environment reference from project data.
pub fn handle(
    host: &mut dyn Host,
    _context: &mut PluginContext<'_>,
    _args: Vec<String>,
) -> Result<()> {
    if commons::stored_virtualenv(host).is_none() {
        host.status_message("No virtualenv is active.");
        return Ok(());
    }
    commons::set_virtualenv(host, None)
}
