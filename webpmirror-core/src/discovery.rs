//! File discovery module for finding candidate files to convert.
//!
//! Discovery returns every regular file under the input tree regardless of
//! extension; eligibility filtering happens later in the pipeline. The
//! "Found N files" count reported to the user is taken from this unfiltered
//! listing.

use crate::error::CoreResult;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively lists every regular file beneath `input_dir`.
///
/// # Arguments
///
/// * `input_dir` - The directory tree to search
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of all files found, in traversal order
/// * `Err(CoreError::Walkdir)` - If the traversal fails (including a
///   missing or unreadable input directory)
///
/// Traversal order is whatever the underlying walk yields; callers must not
/// rely on it.
pub fn find_all_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
