// src/constants.rs

/// The platform subdirectory of an environment root holding its executables.
#[cfg(windows)]
pub const VIRTUALENV_BINDIR: &str = "Scripts";
#[cfg(not(windows))]
pub const VIRTUALENV_BINDIR: &str = "bin";

/// The file whose presence marks a directory as a usable virtualenv.
#[cfg(windows)]
pub const ACTIVATE_MARKER: &str = "activate.bat";
#[cfg(not(windows))]
pub const ACTIVATE_MARKER: &str = "activate";

/// The environment variable identifying the active environment root.
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// The interpreter-home variable stripped from build environments by policy.
pub const PYTHONHOME_VAR: &str = "PYTHONHOME";

/// Search path used when the process inherits no `PATH` at all.
#[cfg(windows)]
pub const DEFAULT_SEARCH_PATH: &str = ".;C:\\bin";
#[cfg(not(windows))]
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// The name of the directory containing venvman data for a project.
pub const VENVMAN_DIR: &str = ".venvman";

/// The name of the project-data file (inside .venvman/).
pub const PROJECT_DATA_FILENAME: &str = "project.json";

/// The name of the settings file (in the user config dir).
pub const SETTINGS_FILENAME: &str = "settings.toml";

/// Project-data key holding the active environment root.
pub const PROJECT_VIRTUALENV_KEY: &str = "virtualenv";

/// Project-data key holding the nested per-project settings object.
pub const PROJECT_SETTINGS_KEY: &str = "settings";

/// Key inside the per-project settings object pointing at the interpreter.
pub const PYTHON_INTERPRETER_KEY: &str = "python_interpreter";
