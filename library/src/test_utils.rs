/// Helper methods for tests.
use std::fs;
use std::path::{Path, PathBuf};

use tempdir::TempDir;

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

pub fn read_fixture(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
