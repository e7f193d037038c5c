// src/core/activation.rs

use std::collections::HashMap;
use std::env;
use std::path::Path;

use crate::constants::{DEFAULT_SEARCH_PATH, VIRTUAL_ENV_VAR, VIRTUALENV_BINDIR};
use crate::models::Activation;

/// Separator joining search-path entries on this platform.
#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = ':';

/// Computes the activation state for an environment root against an explicit
/// search path.
///
/// Pure function: no filesystem access and no validity check. Callers that
/// need a guarantee must run [`crate::core::venvs::is_virtualenv`] first.
/// The overlay value is the root exactly as given, with no normalization.
pub fn activate_with_search_path(virtualenv: &Path, current_path: &str) -> Activation {
    let bindir = virtualenv.join(VIRTUALENV_BINDIR);
    let search_path = format!("{}{}{}", bindir.display(), PATH_SEPARATOR, current_path);

    let mut env = HashMap::new();
    env.insert(
        VIRTUAL_ENV_VAR.to_string(),
        virtualenv.display().to_string(),
    );

    Activation { search_path, env }
}

/// Convenience wrapper over [`activate_with_search_path`] reading the
/// inherited `PATH`, falling back to the platform default search path when
/// the variable is unset.
pub fn activate(virtualenv: &Path) -> Activation {
    let current_path = env::var("PATH").unwrap_or_else(|_| DEFAULT_SEARCH_PATH.to_string());
    activate_with_search_path(virtualenv, &current_path)
}
