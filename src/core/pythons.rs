// src/core/pythons.rs

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Mutex;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::DEFAULT_SEARCH_PATH;

/// CPython executables: `python`, `python3`, `python3.12`, ...
#[cfg(windows)]
const PYTHON_NAME_PATTERN: &str = r"^python[0-9.]*(?:\.exe)?$";
#[cfg(not(windows))]
const PYTHON_NAME_PATTERN: &str = r"^python[0-9.]*$";

/// Alternate implementations, listed after the CPython group per directory.
#[cfg(windows)]
const ALTERNATE_NAME_PATTERN: &str = r"^pypy[0-9.]*(?:\.exe)?$";
#[cfg(not(windows))]
const ALTERNATE_NAME_PATTERN: &str = r"^pypy[0-9.]*$";

/// Cache key: the exact input tuple of a scan.
type ScanKey = (Vec<PathBuf>, Vec<PathBuf>, Vec<String>);

lazy_static! {
    static ref PYTHON_NAME_RE: Regex = Regex::new(PYTHON_NAME_PATTERN).unwrap();
    static ref ALTERNATE_NAME_RE: Regex = Regex::new(ALTERNATE_NAME_PATTERN).unwrap();

    /// Process-lifetime memo for interpreter scans. Scans and probes are
    /// assumed stable within one session; only a restart invalidates this.
    static ref SCAN_CACHE: Mutex<HashMap<ScanKey, Vec<PathBuf>>> = Mutex::new(HashMap::new());
}

/// Finds Python interpreter executables in the given directories.
///
/// An empty `paths` falls back to the process search path split on the
/// platform separator (or the platform default search path when `PATH` is
/// unset); `extra_paths` are always appended after. Within each directory,
/// names matching the primary interpreter pattern come first, then alternate
/// implementations, each group sorted lexicographically; only existing
/// executable files survive.
///
/// With `required_capabilities` non-empty, every candidate is probed with an
/// import expression and dropped on a non-zero exit. This is the only step
/// that spawns processes, so its cost grows with the candidate count; with no
/// capabilities requested, no process is ever spawned.
pub fn find_pythons(
    paths: &[PathBuf],
    extra_paths: &[PathBuf],
    required_capabilities: &[String],
) -> Vec<PathBuf> {
    let key: ScanKey = (
        paths.to_vec(),
        extra_paths.to_vec(),
        required_capabilities.to_vec(),
    );
    if let Some(cached) = SCAN_CACHE.lock().unwrap().get(&key) {
        log::debug!("Interpreter scan served from cache.");
        return cached.clone();
    }

    let mut effective: Vec<PathBuf> = if paths.is_empty() {
        let path_var = env::var("PATH").unwrap_or_else(|_| DEFAULT_SEARCH_PATH.to_string());
        env::split_paths(&path_var).collect()
    } else {
        paths.to_vec()
    };
    effective.extend(extra_paths.iter().cloned());

    let mut pythons = Vec::new();
    for dir in &effective {
        if !dir.is_dir() {
            log::warn!("{} is not a directory. Path ignored.", dir.display());
            continue;
        }
        pythons.extend(scan_directory(dir));
    }

    if !required_capabilities.is_empty() {
        pythons.retain(|python| probe_capabilities(python, required_capabilities));
    }

    SCAN_CACHE.lock().unwrap().insert(key, pythons.clone());
    pythons
}

/// Interpreter candidates in one directory: primary-pattern names first, then
/// alternate-pattern names, each group sorted lexicographically.
fn scan_directory(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            log::warn!("Could not list {}: {}. Path ignored.", dir.display(), error);
            return Vec::new();
        }
    };

    let mut primary = Vec::new();
    let mut alternate = Vec::new();
    for entry in entries.filter_map(|entry| entry.ok()) {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if PYTHON_NAME_RE.is_match(name) {
            primary.push(entry.path());
        } else if ALTERNATE_NAME_RE.is_match(name) {
            alternate.push(entry.path());
        }
    }
    primary.sort();
    alternate.sort();

    primary
        .into_iter()
        .chain(alternate)
        .filter(|candidate| is_executable(candidate))
        .collect()
}

/// Executable-permission check on POSIX; file existence suffices on Windows.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Runs the candidate with an import expression covering every required
/// capability. Any non-zero exit (or a failure to spawn at all) excludes the
/// candidate; a crashed interpreter is indistinguishable from a missing
/// module here.
fn probe_capabilities(python: &Path, capabilities: &[String]) -> bool {
    let expression = format!("import {}", capabilities.join(", "));
    log::debug!("Probing {} with '{}'.", python.display(), expression);
    Command::new(python)
        .arg("-c")
        .arg(&expression)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(dir: &Path, name: &str, contents: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn name_patterns_accept_versioned_interpreters_only() {
        assert!(PYTHON_NAME_RE.is_match("python"));
        assert!(PYTHON_NAME_RE.is_match("python3"));
        assert!(PYTHON_NAME_RE.is_match("python3.12"));
        assert!(!PYTHON_NAME_RE.is_match("pythonista"));
        assert!(!PYTHON_NAME_RE.is_match("Python"));
        assert!(!PYTHON_NAME_RE.is_match("bpython"));

        assert!(ALTERNATE_NAME_RE.is_match("pypy"));
        assert!(ALTERNATE_NAME_RE.is_match("pypy3.10"));
        assert!(!ALTERNATE_NAME_RE.is_match("pypyx"));
    }

    #[cfg(unix)]
    #[test]
    fn primary_group_precedes_the_alternate_group_each_sorted() {
        let dir = TempDir::new().unwrap();
        let pypy = make_executable(dir.path(), "pypy3", "");
        let python3 = make_executable(dir.path(), "python3", "");
        let python = make_executable(dir.path(), "python", "");
        make_executable(dir.path(), "pip", "");

        let found = find_pythons(&[dir.path().to_path_buf()], &[], &[]);
        assert_eq!(found, vec![python, python3, pypy]);
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_candidates_are_excluded() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("python3"), "").unwrap();

        let found = find_pythons(&[dir.path().to_path_buf()], &[], &[]);
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn extra_paths_are_appended_after_the_search_directories() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        let first = make_executable(dir_a.path(), "python3", "");
        let second = make_executable(dir_b.path(), "python", "");

        let found = find_pythons(
            &[dir_a.path().to_path_buf()],
            &[dir_b.path().to_path_buf()],
            &[],
        );
        assert_eq!(found, vec![first, second]);
    }

    #[cfg(unix)]
    #[test]
    fn unsatisfiable_capability_yields_an_empty_result() {
        let dir = TempDir::new().unwrap();
        // A fake interpreter that rejects every probe.
        make_executable(dir.path(), "python3", "#!/bin/sh\nexit 1\n");

        let found = find_pythons(
            &[dir.path().to_path_buf()],
            &[],
            &["definitely_not_a_module".to_string()],
        );
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn satisfied_capability_keeps_the_candidate() {
        let dir = TempDir::new().unwrap();
        let python = make_executable(dir.path(), "python3", "#!/bin/sh\nexit 0\n");

        let found = find_pythons(
            &[dir.path().to_path_buf()],
            &[],
            &["sys".to_string()],
        );
        assert_eq!(found, vec![python]);
    }

    #[cfg(unix)]
    #[test]
    fn repeated_scans_hit_the_memo_and_stay_identical() {
        let dir = TempDir::new().unwrap();
        make_executable(dir.path(), "python3", "");

        let paths = vec![dir.path().to_path_buf()];
        let first = find_pythons(&paths, &[], &[]);
        // Removing the file does not change the answer within this process:
        // the scan is memoized on the exact input tuple.
        fs::remove_file(dir.path().join("python3")).unwrap();
        let second = find_pythons(&paths, &[], &[]);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_directory_is_skipped_without_error() {
        let found = find_pythons(&[PathBuf::from("/definitely/not/a/directory")], &[], &[]);
        assert!(found.is_empty());
    }
}
