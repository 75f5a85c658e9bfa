//! Source file collection.
//!
//! Walks a root location recursively and yields absolute paths of PHP
//! source files. Unlike a typical project walker, no standard filters
//! apply: hidden files and gitignored files are still source files as far
//! as a declaration inventory is concerned.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::errors::FinderError;

/// Extension of the source files this crate scans.
pub const SOURCE_EXTENSION: &str = "php";

/// Collect every source file under `root`, in path order.
///
/// The root is canonicalized once so that yielded paths (and therefore
/// exclusion-pattern candidates) are absolute. A missing root is an error;
/// unreadable entries below it are skipped.
pub fn source_files(root: &Path) -> Result<Vec<PathBuf>, FinderError> {
    let root = root
        .canonicalize()
        .map_err(|_| FinderError::LocationNotFound(root.to_path_buf()))?;

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION))
        .collect();

    files.sort();
    Ok(files)
}
