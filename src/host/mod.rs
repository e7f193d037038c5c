//! # Host Collaborator Layer
//!
//! The command layer never talks to an editor or a terminal directly.
//! Everything it needs from its host runtime (selection panels, text prompts,
//! dialogs, the project-data blob, process execution) goes through the
//! [`Host`] trait, so the same commands run unchanged under any host adapter.

pub mod settings;
pub mod terminal;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use serde_json::Value;

use crate::models::Settings;

/// A request to run an external command through the host's own runner.
#[derive(Debug, Clone, Default)]
pub struct ExecRequest {
    /// Argument vector; the first element is the program.
    pub cmd: Vec<String>,
    /// Working directory; the host's own current directory when `None`.
    pub working_dir: Option<PathBuf>,
    /// Environment overlay applied on top of the inherited environment.
    pub env: HashMap<String, String>,
    /// Variables removed from the inherited environment before spawning.
    pub env_removals: Vec<String>,
    /// Replacement for the search-path variable; inherited when `None`.
    pub search_path: Option<String>,
}

/// The contract a host runtime provides to the command layer.
pub trait Host {
    /// Open project folders, in the host's own order.
    fn project_folders(&self) -> Vec<PathBuf>;

    /// The project's key-value configuration blob. The host owns persistence;
    /// the command layer only reads and rewrites the value.
    fn project_data(&self) -> Value;

    fn set_project_data(&mut self, data: Value) -> Result<()>;

    /// Shows a selectable list of labels. `None` means the user cancelled.
    fn quick_panel(&mut self, items: &[String]) -> Result<Option<usize>>;

    /// Prompts for free-text input with a default. `None` means cancelled.
    fn input_panel(&mut self, prompt: &str, default: &str) -> Result<Option<String>>;

    /// Blocking ok/cancel confirmation.
    fn ok_cancel_dialog(&mut self, message: &str) -> Result<bool>;

    /// Blocking error notification.
    fn error_message(&mut self, message: &str);

    /// Transient, non-blocking status line.
    fn status_message(&mut self, message: &str);

    /// Runs an external command, surfacing output and exit status through the
    /// host's own execution UI.
    fn run_command(&mut self, request: ExecRequest) -> Result<()>;
}

/// Persistence contract for the plugin settings blob.
pub trait SettingsStore {
    fn load(&self) -> Result<Settings>;
    fn save(&self, settings: &Settings) -> Result<()>;
}
