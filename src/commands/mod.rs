//! # Command Layer
//!
//! Thin adapters between the host collaborator and the discovery/activation
//! core. Every user-facing operation is a handler in this module tree,
//! registered once in the dispatch table below.

pub mod activate;
pub mod add_directory;
pub mod commons;
pub mod deactivate;
pub mod exec;
pub mod new;
pub mod remove;
pub mod repl;

use anyhow::{Result, anyhow};

use crate::host::{Host, SettingsStore};
use crate::models::Settings;

/// Mutable dispatch state: the loaded settings plus the store persisting them.
pub struct PluginContext<'a> {
    pub settings: Settings,
    pub settings_store: &'a dyn SettingsStore,
}

/// Defines a plugin command, its aliases, and its handler function.
pub struct CommandDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub about: &'static str,
    pub handler: fn(&mut dyn Host, &mut PluginContext<'_>, Vec<String>) -> Result<()>,
}

/// The single source of truth for all plugin commands.
pub static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "activate",
        aliases: &["select"],
        about: "Choose the active virtualenv from the discovered ones.",
        handler: activate::handle,
    },
    CommandDefinition {
        name: "deactivate",
        aliases: &[],
        about: "Clear the active virtualenv reference.",
        handler: deactivate::handle,
    },
    CommandDefinition {
        name: "new",
        aliases: &[],
        about: "Create a virtualenv with the configured tool and activate it.",
        handler: new::handle,
    },
    CommandDefinition {
        name: "new-builtin",
        aliases: &["venv"],
        about: "Create a virtualenv with `python -m venv` and activate it.",
        handler: new::handle_builtin,
    },
    CommandDefinition {
        name: "remove",
        aliases: &["rm"],
        about: "Delete a discovered virtualenv's directory tree.",
        handler: remove::handle,
    },
    CommandDefinition {
        name: "add-directory",
        aliases: &["add-dir"],
        about: "Add a directory to the virtualenv search list.",
        handler: add_directory::handle,
    },
    CommandDefinition {
        name: "exec",
        aliases: &["run"],
        about: "Run a command with the active virtualenv injected.",
        handler: exec::handle,
    },
    CommandDefinition {
        name: "repl",
        aliases: &[],
        about: "Open an interactive Python inside the active virtualenv.",
        handler: repl::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
pub fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Routes a parsed invocation to its handler.
pub fn dispatch(
    name: &str,
    args: Vec<String>,
    host: &mut dyn Host,
    context: &mut PluginContext<'_>,
) -> Result<()> {
    log::debug!("Dispatching command '{}' with args: {:?}", name, args);
    let command = find_command(name)
        .ok_or_else(|| anyhow!("Unknown command '{}'. Run without arguments for the list.", name))?;
    (command.handler)(host, context, args)
}
