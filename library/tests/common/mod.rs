use std::fs;
use std::path::{Path, PathBuf};

use tempdir::TempDir;

pub const TXN_SOURCE: &str = "libs/odpi/test/test_4500_sessionless_txn.c";
pub const BFILE_SOURCE: &str = "libs/odpi/samples/DemoBFILE.c";

/// Writes a source file at `relative` under `root`, creating parent dirs.
pub fn write_source(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

/// Runs `f` with the process working directory set to `dir`, restoring the
/// previous one afterwards. Callers must be #[serial].
pub fn with_current_dir<R>(dir: &TempDir, f: impl FnOnce() -> R) -> R {
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = f();
    std::env::set_current_dir(previous).unwrap();
    result
}
