// Filesystem access used by the Patcher, behind a trait so tests can make
// individual operations fail.

use std::fs;
use std::io;
use std::path::Path;

/// ELOOP: too many symbolic links while resolving the path.
#[cfg(any(target_os = "macos", target_os = "ios"))]
const ELOOP: i32 = 62;
#[cfg(not(any(target_os = "macos", target_os = "ios")))]
const ELOOP: i32 = 40;

pub trait SourceFiles {
    /// Succeeds if something exists at `path`.
    fn stat(&self, path: &Path) -> io::Result<()>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replaces the whole content of the file at `path`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem, with paths taken relative to the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFiles;

impl SourceFiles for DiskFiles {
    fn stat(&self, path: &Path) -> io::Result<()> {
        fs::metadata(path).map(|_| ())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Whether a failed `stat` means nothing can exist at the path: the path is
/// absent, one of its parents is a regular file, or it loops through symlinks.
pub fn is_missing_path(error: &io::Error) -> bool {
    match error.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => true,
        _ => error.raw_os_error() == Some(ELOOP),
    }
}
