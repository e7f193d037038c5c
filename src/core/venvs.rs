// src/core/venvs.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{ACTIVATE_MARKER, VIRTUALENV_BINDIR};

/// Scans each directory for immediate subdirectories that are valid
/// virtualenvs.
///
/// Directories are processed independently: results are sorted
/// lexicographically within each input directory and concatenated in input
/// order, so callers can group entries by source directory. Inputs that are
/// not existing directories contribute nothing and are skipped with a warning.
/// There is no recursion into nested subdirectories.
pub fn find_virtualenvs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut virtualenvs = Vec::new();
    for path in paths {
        if !path.is_dir() {
            log::warn!("{} is not a directory. Path ignored.", path.display());
            continue;
        }
        let mut found: Vec<PathBuf> = subdirectories(path)
            .into_iter()
            .filter(|subdir| is_virtualenv(subdir))
            .collect();
        found.sort();
        log::debug!("Found {} virtualenv(s) in {}.", found.len(), path.display());
        virtualenvs.extend(found);
    }
    virtualenvs
}

/// Immediate subdirectories of `path`. Unreadable entries are dropped.
fn subdirectories(path: &Path) -> Vec<PathBuf> {
    match fs::read_dir(path) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|entry_path| entry_path.is_dir())
            .collect(),
        Err(error) => {
            log::warn!("Could not list {}: {}. Path ignored.", path.display(), error);
            Vec::new()
        }
    }
}

/// True iff `path` holds the platform activation marker as a regular file.
///
/// Any filesystem failure (permissions, I/O) counts as "not a virtualenv".
/// The check is repeated on every call: the directory may have been deleted
/// or corrupted since the last one.
pub fn is_virtualenv(path: &Path) -> bool {
    path.join(VIRTUALENV_BINDIR).join(ACTIVATE_MARKER).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Creates `<root>/<name>/<bindir>/<marker>` so the subdirectory passes
    /// the validity check.
    fn make_virtualenv(root: &Path, name: &str) -> PathBuf {
        let venv = root.join(name);
        let bindir = venv.join(VIRTUALENV_BINDIR);
        fs::create_dir_all(&bindir).unwrap();
        fs::write(bindir.join(ACTIVATE_MARKER), "").unwrap();
        venv
    }

    #[test]
    fn finds_only_subdirectories_with_the_activation_marker() {
        let dir = TempDir::new().unwrap();
        let valid = make_virtualenv(dir.path(), "a");
        // A bare subdirectory and a plain file must both be excluded.
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();

        let found = find_virtualenvs(&[dir.path().to_path_buf()]);
        assert_eq!(found, vec![valid]);
        assert!(found.iter().all(|venv| is_virtualenv(venv)));
    }

    #[test]
    fn results_are_sorted_within_a_single_directory() {
        let dir = TempDir::new().unwrap();
        let second = make_virtualenv(dir.path(), "zeta");
        let first = make_virtualenv(dir.path(), "alpha");

        let found = find_virtualenvs(&[dir.path().to_path_buf()]);
        assert_eq!(found, vec![first, second]);
    }

    #[test]
    fn directories_are_grouped_by_source_not_globally_sorted() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        let late = make_virtualenv(dir_a.path(), "zz");
        let early = make_virtualenv(dir_b.path(), "aa");

        // dir_a comes first in the input, so its entries come first in the
        // output even though "aa" sorts before "zz".
        let found = find_virtualenvs(&[dir_a.path().to_path_buf(), dir_b.path().to_path_buf()]);
        assert_eq!(found, vec![late, early]);
    }

    #[test]
    fn repeated_scans_return_identical_sequences() {
        let dir = TempDir::new().unwrap();
        make_virtualenv(dir.path(), "a");
        make_virtualenv(dir.path(), "b");

        let paths = vec![dir.path().to_path_buf()];
        assert_eq!(find_virtualenvs(&paths), find_virtualenvs(&paths));
    }

    #[test]
    fn missing_directory_contributes_nothing_and_does_not_fail() {
        let dir = TempDir::new().unwrap();
        let valid = make_virtualenv(dir.path(), "a");

        let found = find_virtualenvs(&[
            PathBuf::from("/definitely/not/a/directory"),
            dir.path().to_path_buf(),
        ]);
        assert_eq!(found, vec![valid]);
    }

    #[test]
    fn marker_must_be_a_regular_file() {
        let dir = TempDir::new().unwrap();
        let venv = dir.path().join("a");
        // The marker exists but is a directory.
        fs::create_dir_all(venv.join(VIRTUALENV_BINDIR).join(ACTIVATE_MARKER)).unwrap();

        assert!(!is_virtualenv(&venv));
        assert!(find_virtualenvs(&[dir.path().to_path_buf()]).is_empty());
    }

    #[test]
    fn validity_is_rechecked_after_the_marker_disappears() {
        let dir = TempDir::new().unwrap();
        let venv = make_virtualenv(dir.path(), "a");
        assert!(is_virtualenv(&venv));

        fs::remove_file(venv.join(VIRTUALENV_BINDIR).join(ACTIVATE_MARKER)).unwrap();
        assert!(!is_virtualenv(&venv));
    }
}
