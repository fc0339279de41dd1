// This file's job is to apply the patch table to the files on disk.

use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::file_errors::{FileOperation, IoResultExt};
use crate::source_files::{is_missing_path, DiskFiles, SourceFiles};
use crate::table::{PatchEntry, PatchTable};

const SEPARATOR: &str = "-----------------------------------------";

/// What happened to a file that was patched without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
    AlreadyApplied,
    Applied,
}

impl Display for PatchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchStatus::AlreadyApplied => write!(f, "Already applied"),
            PatchStatus::Applied => write!(f, "Applied"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum PatchError {
    MissingFile(PathBuf),
}

impl std::error::Error for PatchError {}

impl Display for PatchError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PatchError::MissingFile(path) => write!(f, "File not found: {}", path.display()),
        }
    }
}

/// Tally of one pass over a patch table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    pub attempted: usize,
    pub succeeded: usize,
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        self.succeeded == self.attempted
    }

    /// Process exit code for this run: 0 when every entry succeeded, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    fn record(&mut self, succeeded: bool) {
        self.attempted += 1;
        if succeeded {
            self.succeeded += 1;
        }
    }
}

impl Display for RunResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} files checked/patched successfully.",
            self.succeeded, self.attempted
        )
    }
}

/// Applies patch entries to `files` and writes human-readable progress to `out`.
pub struct Patcher<W: Write, F: SourceFiles = DiskFiles> {
    out: W,
    files: F,
}

impl<W: Write> Patcher<W> {
    pub fn new(out: W) -> Self {
        Self::with_files(out, DiskFiles)
    }
}

impl<W: Write, F: SourceFiles> Patcher<W, F> {
    pub fn with_files(out: W, files: F) -> Self {
        Self { out, files }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Makes sure the file at `entry.path` starts with the entry's normalized
    /// body. Returns false if the file is missing or could not be read or
    /// written; the failure is reported on the status stream.
    pub fn apply(&mut self, entry: &PatchEntry) -> bool {
        self.status(format_args!("--- Checking {} ---", entry.path.display()));
        match self.try_apply(&entry.path, entry.normalized_body()) {
            Ok(status) => {
                prepatch_debug!("{}: {}", entry.path.display(), status);
                true
            }
            Err(err) => {
                match err.downcast_ref::<PatchError>() {
                    Some(PatchError::MissingFile(path)) => self.status(format_args!(
                        "ERROR: File not found at {}. Skipping.",
                        path.display()
                    )),
                    None => self.status(format_args!(
                        "ERROR: Failed to patch file {}: {}",
                        entry.path.display(),
                        err
                    )),
                }
                prepatch_error!("Patching {} failed: {:#}", entry.path.display(), err);
                false
            }
        }
    }

    /// Applies every entry of `table` in order and prints the summary line.
    /// A failing entry never stops the entries after it.
    pub fn run(&mut self, table: &PatchTable) -> RunResult {
        self.status(format_args!("Starting C source file patching process..."));
        let mut result = RunResult::default();
        for entry in table {
            let succeeded = self.apply(entry);
            result.record(succeeded);
        }
        self.status(format_args!("{}", SEPARATOR));
        self.status(format_args!("Patching process complete. {}", result));
        result
    }

    fn try_apply(&mut self, path: &Path, body: &str) -> anyhow::Result<PatchStatus> {
        // A permission error on a parent directory is reported as such and
        // not as a missing file.
        match self.files.stat(path) {
            Ok(()) => {}
            Err(e) if is_missing_path(&e) => {
                anyhow::bail!(PatchError::MissingFile(path.to_path_buf()))
            }
            Err(e) => return Err(e).with_file_context(FileOperation::GetMetadata, path),
        }

        let original = self
            .files
            .read_to_string(path)
            .with_file_context(FileOperation::ReadFile, path)?;
        prepatch_debug!("Read {} bytes from {}", original.len(), path.display());

        if original.starts_with(body) {
            self.status(format_args!("Patch already applied, skipping."));
            return Ok(PatchStatus::AlreadyApplied);
        }

        self.status(format_args!("Applying patch..."));
        let patched = prepend(body, &original);
        self.files
            .write(path, &patched)
            .with_file_context(FileOperation::WriteFile, path)?;
        prepatch_debug!("Wrote {} bytes to {}", patched.len(), path.display());
        self.status(format_args!("Successfully applied patch."));
        Ok(PatchStatus::Applied)
    }

    // Status lines are best effort: a closed stdout must not turn a patched
    // file into a reported failure.
    fn status(&mut self, line: std::fmt::Arguments) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            prepatch_warn!("Failed to write status line: {}", e);
        }
    }
}

fn prepend(body: &str, original: &str) -> String {
    let mut patched = String::with_capacity(body.len() + 2 + original.len());
    patched.push_str(body);
    patched.push_str("\n\n");
    patched.push_str(original);
    patched
}

/// Applies every entry of `table`, reporting progress on stdout.
pub fn run(table: &PatchTable) -> RunResult {
    Patcher::new(std::io::stdout().lock()).run(table)
}
