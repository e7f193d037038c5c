// src/bin/venvman.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use venvman::{
    commands::{self, PluginContext},
    host::{SettingsStore, settings::FileSettingsStore, terminal::TerminalHost},
};

/// venvman: discover, create, activate and run Python virtualenvs.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// The command to run. Omit it to list the available commands.
    command: Option<String>,

    /// Arguments passed through to the command.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// The main entry point. It sets up logging, parses arguments, dispatches to
/// the correct handler and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let Some(command) = cli.command else {
        print_command_list();
        return Ok(());
    };

    let store = FileSettingsStore::open_default()?;
    let settings = store.load()?;
    let mut context = PluginContext {
        settings,
        settings_store: &store,
    };
    let mut host = TerminalHost::from_current_dir()?;

    commands::dispatch(&command, cli.args, &mut host, &mut context)
}

/// Prints the dispatch table, one line per command.
fn print_command_list() {
    println!("{}", "Available commands:".yellow().bold());
    for command in commands::COMMAND_REGISTRY {
        let aliases = if command.aliases.is_empty() {
            String::new()
        } else {
            format!(" ({})", command.aliases.join(", "))
        };
        println!(
            "  {}{}  {}",
            command.name.cyan(),
            aliases.dimmed(),
            command.about
        );
    }
}
