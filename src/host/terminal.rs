// src/host/terminal.rs

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use serde_json::Value;

use crate::constants::{PROJECT_DATA_FILENAME, VENVMAN_DIR};
use crate::host::{ExecRequest, Host};
use crate::system::executor;

/// Terminal-backed host adapter.
///
/// Panels map to dialoguer prompts, the project-data blob lives as pretty
/// JSON under `.venvman/` in the project root, and command execution goes
/// through the system executor with inherited stdio.
pub struct TerminalHost {
    project_root: PathBuf,
}

impl TerminalHost {
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Host rooted at the current working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = env::current_dir().context("Could not determine the current directory")?;
        Ok(Self::new(cwd))
    }

    fn project_data_path(&self) -> PathBuf {
        self.project_root.join(VENVMAN_DIR).join(PROJECT_DATA_FILENAME)
    }
}

impl Host for TerminalHost {
    fn project_folders(&self) -> Vec<PathBuf> {
        vec![self.project_root.clone()]
    }

    fn project_data(&self) -> Value {
        let path = self.project_data_path();
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|error| {
                log::warn!(
                    "Corrupt project data at {}: {}. Starting fresh.",
                    path.display(),
                    error
                );
                Value::Object(serde_json::Map::new())
            }),
            // A missing file simply means the project has no data yet.
            Err(_) => Value::Object(serde_json::Map::new()),
        }
    }

    fn set_project_data(&mut self, data: Value) -> Result<()> {
        let path = self.project_data_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Could not create project data directory '{}'", parent.display())
            })?;
        }
        fs::write(&path, serde_json::to_string_pretty(&data)?)
            .with_context(|| format!("Failed to write project data at '{}'", path.display()))
    }

    fn quick_panel(&mut self, items: &[String]) -> Result<Option<usize>> {
        if items.is_empty() {
            println!("{}", "Nothing to select.".yellow());
            return Ok(None);
        }
        let selection = Select::with_theme(&ColorfulTheme::default())
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(selection)
    }

    fn input_panel(&mut self, prompt: &str, default: &str) -> Result<Option<String>> {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .with_initial_text(default)
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(input))
        }
    }

    fn ok_cancel_dialog(&mut self, message: &str) -> Result<bool> {
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()?)
    }

    fn error_message(&mut self, message: &str) {
        eprintln!("{}: {}", "Error".red().bold(), message);
    }

    fn status_message(&mut self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn run_command(&mut self, request: ExecRequest) -> Result<()> {
        let cwd = request
            .working_dir
            .clone()
            .unwrap_or_else(|| self.project_root.clone());
        executor::execute_command(
            &request.cmd,
            &cwd,
            &request.env,
            &request.env_removals,
            request.search_path.as_deref(),
        )?;
        Ok(())
    }
}
