// src/commands/repl.rs

use anyhow::Result;

use super::commons::VirtualenvError;
use super::{PluginContext, commons, exec};
use crate::host::{ExecRequest, Host};

/// Launches an interactive Python prompt inside the active environment.
///
/// Unlike `exec`, this requires an active environment: a bare `python -i`
/// without one would silently pick up whatever the system provides.
pub fn handle(
    host: &mut dyn Host,
    context: &mut PluginContext<'_>,
    _args: Vec<String>,
) -> Result<()> {
    let venv = match commons::validated_virtualenv(host) {
        Ok(Some(venv)) => venv,
        Ok(None) => {
            host.error_message(&VirtualenvError::NoneActive.to_string());
            return Ok(());
        }
        Err(error) => {
            host.error_message(&format!("{} REPL cancelled!", error));
            return Ok(());
        }
    };

    let mut request = ExecRequest {
        cmd: vec!["python".to_string(), "-i".to_string(), "-u".to_string()],
        ..ExecRequest::default()
    };
    request
        .env
        .insert("PYTHONIOENCODING".to_string(), "utf-8".to_string());
    let request = exec::apply_activation(request, &venv, &context.settings);
    host.run_command(request)
}
