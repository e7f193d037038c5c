// src/commands/activate.rs

use anyhow::Result;

use super::{PluginContext, commons};
use crate::host::Host;

/// Presents the discovered environments and stores the chosen one as active.
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

    commons::set_virtualenv(host, Some(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ACTIVATE_MARKER, VIRTUALENV_BINDIR};
    use crate::host::testing::{NullSettingsStore, ScriptedHost};
    use crate::models::Settings;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn selecting_an_entry_stores_it_as_active() {
        let dir = TempDir::new().unwrap();
        for name in ["alpha", "beta"] {
            let bindir = dir.path().join(name).join(VIRTUALENV_BINDIR);
            fs::create_dir_all(&bindir).unwrap();
            fs::write(bindir.join(ACTIVATE_MARKER), "").unwrap();
        }

        let mut host = ScriptedHost::new();
        host.folders = vec![dir.path().to_path_buf()];
        host.panel_answers = vec![Some(1)];
        let store = NullSettingsStore;
        let mut context = PluginContext {
            settings: Settings::default(),
            settings_store: &store,
        };

        handle(&mut host, &mut context, Vec::new()).unwrap();

        assert_eq!(
            commons::stored_virtualenv(&host),
            Some(dir.path().join("beta"))
        );
    }

    #[test]
    fn cancelling_the_panel_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let bindir = dir.path().join("alpha").join(VIRTUALENV_BINDIR);
        fs::create_dir_all(&bindir).unwrap();
        fs::write(bindir.join(ACTIVATE_MARKER), "").unwrap();

        let mut host = ScriptedHost::new();
        host.folders = vec![dir.path().to_path_buf()];
        host.panel_answers = vec![None];
        let store = NullSettingsStore;
        let mut context = PluginContext {
            settings: Settings::default(),
            settings_store: &store,
        };

        handle(&mut host, &mut context, Vec::new()).unwrap();

        assert_eq!(commons::stored_virtualenv(&host), None);
        assert!(host.statuses.is_empty());
    }
}
