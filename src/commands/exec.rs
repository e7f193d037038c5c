// src/commands/exec.rs

use std::path::Path;

use anyhow::Result;

use super::{PluginContext, commons};
use crate::constants::PYTHONHOME_VAR;
use crate::core::activation;
use crate::host::{ExecRequest, Host};
use crate::models::Settings;

/// Runs a build command with the active environment injected.
///
/// With a valid active environment the command receives the activated search
/// path and the `VIRTUAL_ENV` overlay, minus `PYTHONHOME` when the policy
/// flag says so. With none active the command runs untouched. A stored but
/// invalid environment cancels the run with a blocking error and clears the
/// stored reference.
pub fn handle(
    host: &mut dyn Host,
    context: &mut PluginContext<'_>,
    args: Vec<String>,
) -> Result<()> {
    if args.is_empty() {
        host.error_message("No command given. Usage: exec <program> [args...]");
        return Ok(());
    }

    let venv = match commons::validated_virtualenv(host) {
        Ok(venv) => venv,
        Err(error) => {
            host.error_message(&format!("{} Execution cancelled!", error));
            return Ok(());
        }
    };

    let mut request = ExecRequest {
        cmd: args,
        ..ExecRequest::default()
    };
    if let Some(venv) = venv {
        request = apply_activation(request, &venv, &context.settings);
        log::info!("Command executed with virtualenv \"{}\".", venv.display());
    }
    host.run_command(request)
}

/// Injects the activation state into an execution request.
pub fn apply_activation(mut request: ExecRequest, venv: &Path, settings: &Settings) -> ExecRequest {
    let activation = activation::activate(venv);
    request.search_path = Some(activation.search_path);
    request.env.extend(activation.env);
    if settings.clear_pythonhome {
        request.env.remove(PYTHONHOME_VAR);
        request.env_removals.push(PYTHONHOME_VAR.to_string());
    }
    request
}
