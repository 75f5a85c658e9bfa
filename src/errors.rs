//! Error types for the construct finder.

use std::path::PathBuf;

/// Top-level error type for finder operations.
///
/// Per-file problems never surface here: an unreadable file is treated as
/// empty content and contributes no constructs. Only a root location that
/// cannot be resolved at all fails a scan.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("location not found: {}", .0.display())]
    LocationNotFound(PathBuf),
}

/// Map an error to its exit code.
pub fn exit_code(error: &FinderError) -> i32 {
    match error {
        FinderError::LocationNotFound(_) => 3,
    }
}
