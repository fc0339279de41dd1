// This is a required file for rust libraries which declares what files are
// part of the library and what interfaces are public from the library.

#[macro_use]
mod logging_macros;

// Declare other .rs file/module exists, but make them private.
mod applier;
mod file_errors;
mod logging;
mod source_files;
mod table;

#[cfg(test)]
mod test_utils;

pub use self::applier::{run, PatchError, PatchStatus, Patcher, RunResult};
pub use self::file_errors::{FileOperation, IoResultExt};
pub use self::logging::init_logging;
pub use self::source_files::{DiskFiles, SourceFiles};
pub use self::table::{PatchEntry, PatchTable};

#[cfg(test)]
extern crate tempdir;
