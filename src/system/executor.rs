// src/system/executor.rs

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command as StdCommand, Stdio};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("No command specified to run.")]
    EmptyCommand,
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    #[error("Command '{0}' exited with a non-zero error code.")]
    NonZeroExitStatus(String),
}

/// Executes a command and blocks until it finishes.
///
/// The overlay is applied on top of the inherited environment, `env_removals`
/// are dropped from it, and `search_path` replaces the `PATH` variable when
/// given. Stdio is inherited, so interactive children (a REPL) work. On
/// Windows, commands not found directly are retried through `cmd /C` to cover
/// shell built-ins.
pub fn execute_command(
    argv: &[String],
    cwd: &Path,
    env_overlay: &HashMap<String, String>,
    env_removals: &[String],
    search_path: Option<&str>,
) -> Result<(), ExecutionError> {
    let (program, args) = argv.split_first().ok_or(ExecutionError::EmptyCommand)?;
    let display = argv.join(" ");
    let clean_cwd = dunce::simplified(cwd);

    let mut command = StdCommand::new(program);
    command
        .args(args)
        .current_dir(clean_cwd)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    for name in env_removals {
        command.env_remove(name);
    }
    command.envs(env_overlay);
    if let Some(path) = search_path {
        command.env("PATH", path);
    }

    log::debug!("Executing: {}", display);
    let status = match command.status() {
        Ok(status) => status,
        Err(e) if e.kind() == ErrorKind::NotFound && cfg!(target_os = "windows") => {
            // Fallback for Windows built-ins like `echo`.
            log::debug!("Command '{}' not found. Retrying with cmd /C.", program);
            let mut fallback = StdCommand::new("cmd");
            fallback
                .arg("/C")
                .arg(&display)
                .current_dir(clean_cwd)
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
            for name in env_removals {
                fallback.env_remove(name);
            }
            fallback.envs(env_overlay);
            if let Some(path) = search_path {
                fallback.env("PATH", path);
            }
            fallback
                .status()
                .map_err(|e| ExecutionError::CommandFailed(display.clone(), e))?
        }
        Err(e) => return Err(ExecutionError::CommandFailed(display, e)),
    };

    if !status.success() {
        return Err(ExecutionError::NonZeroExitStatus(display));
    }
    Ok(())
}
