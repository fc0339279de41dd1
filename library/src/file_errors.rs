// Readable error messages for the file operations the patcher performs.
// Each message names the operation and the path, and adds a hint about the
// likely cause when the error kind makes one obvious.

use std::io::ErrorKind;
use std::path::Path;

/// Describes the type of file operation that failed.
#[derive(Debug, Clone, Copy)]
pub enum FileOperation {
    ReadFile,
    WriteFile,
    GetMetadata,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::ReadFile => write!(f, "read file"),
            FileOperation::WriteFile => write!(f, "write to file"),
            FileOperation::GetMetadata => write!(f, "get file metadata"),
        }
    }
}

/// Creates an enhanced error message for a file operation failure.
///
/// The message carries the failed operation, the path involved and the
/// underlying IO error, followed by a `Possible cause:` line when one can be
/// inferred from the error.
pub fn enhance_io_error(error: &std::io::Error, operation: FileOperation, path: &Path) -> String {
    let base_message = format!(
        "Failed to {} '{}': {}",
        operation,
        path.display(),
        error
    );

    let hint = get_error_hint(error, operation);

    if hint.is_empty() {
        base_message
    } else {
        format!("{}\nPossible cause: {}", base_message, hint)
    }
}

fn get_error_hint(error: &std::io::Error, operation: FileOperation) -> String {
    match error.kind() {
        ErrorKind::PermissionDenied => get_permission_denied_hint(operation).to_string(),
        ErrorKind::NotFound => "The file or one of its parent directories does not exist.".to_string(),
        ErrorKind::InvalidData => {
            "The file is not valid UTF-8 text and cannot be patched as source.".to_string()
        }
        ErrorKind::IsADirectory => "The path names a directory, not a source file.".to_string(),
        ErrorKind::StorageFull => {
            "The device storage is full. Free up space and try again.".to_string()
        }
        ErrorKind::ReadOnlyFilesystem => "The filesystem is mounted as read-only.".to_string(),
        _ => {
            // Check raw OS error for cases not covered by ErrorKind
            if let Some(os_error) = error.raw_os_error() {
                get_os_error_hint(os_error)
            } else {
                String::new()
            }
        }
    }
}

fn get_permission_denied_hint(operation: FileOperation) -> &'static str {
    match operation {
        FileOperation::ReadFile => "The current user may not have read access to this file.",
        FileOperation::WriteFile => "The current user may not have write access to this file.",
        FileOperation::GetMetadata => {
            "The current user may not have access to one of the parent directories."
        }
    }
}

/// Returns hints for specific OS error codes not covered by ErrorKind.
fn get_os_error_hint(os_error: i32) -> String {
    // Unix/Linux error codes
    match os_error {
        21 => "The path names a directory, not a source file (EISDIR).".to_string(),
        28 => "The device storage is full (ENOSPC). Free up space and try again.".to_string(),
        30 => "The filesystem is mounted as read-only (EROFS).".to_string(),
        122 => "Disk quota exceeded (EDQUOT).".to_string(),
        _ => String::new(),
    }
}

/// A trait extension for adding enhanced context to IO Results.
pub trait IoResultExt<T> {
    /// Adds enhanced error context to an IO operation result.
    fn with_file_context(self, operation: FileOperation, path: &Path) -> anyhow::Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_file_context(self, operation: FileOperation, path: &Path) -> anyhow::Result<T> {
        self.map_err(|e| {
            let enhanced_message = enhance_io_error(&e, operation, path);
            anyhow::Error::new(e).context(enhanced_message)
        })
    }
}
