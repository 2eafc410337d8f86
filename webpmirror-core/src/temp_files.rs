//! Temporary file utilities for atomic output writes.
//!
//! Encoded bytes are staged in a temporary file next to their destination
//! and moved into place with a rename, so a crashed or failed run never
//! leaves a truncated `.webp` behind. The tempfile crate cleans up the
//! staging file via Drop if the write fails partway.

use std::io::Write;
use std::path::Path;

use tempfile::Builder as TempFileBuilder;

use crate::error::{CoreError, CoreResult};

/// Writes `bytes` to `dest` atomically: stage in a temp file in the same
/// directory, then rename over the destination.
///
/// The destination's parent directory must already exist.
pub fn persist_atomically(dest: &Path, bytes: &[u8]) -> CoreResult<()> {
    let parent = dest.parent().ok_or_else(|| {
        CoreError::PathError(format!(
            "Could not determine parent directory for '{}'",
            dest.display()
        ))
    })?;

    let mut staged = TempFileBuilder::new()
        .prefix(".webpmirror_")
        .suffix(".tmp")
        .tempfile_in(parent)?;
    staged.write_all(bytes)?;
    staged.flush()?;
    staged.persist(dest).map_err(|e| CoreError::Io(e.error))?;

    Ok(())
}
