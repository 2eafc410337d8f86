//! Mirrored path mapping and eligibility filtering.
//!
//! Every output path is the input-root to output-root substitution of its
//! source path with the extension replaced by `.webp`. Two distinct sources
//! that differ only by extension (`photo.jpg` and `photo.png`) would map to
//! the same output; planning rejects that as a collision instead of letting
//! traversal order pick a winner.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// A single conversion request: one source file and its computed mirrored
/// output location. Requests are ephemeral; one is built per eligible file
/// and discarded when that file's processing step completes.
#[derive(Debug, Clone)]
pub struct PlannedConversion {
    /// Absolute path of the source file
    pub source: PathBuf,
    /// Source path relative to the input root
    pub source_rel: PathBuf,
    /// Absolute path of the output `.webp` file
    pub output: PathBuf,
    /// Output path relative to the output root
    pub output_rel: PathBuf,
}

/// Checks whether a file's lowercased extension is in the allow-list.
/// Files with no extension are never eligible.
#[must_use]
pub fn is_eligible(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| {
            let lowered = ext_str.to_ascii_lowercase();
            extensions.iter().any(|e| *e == lowered)
        })
        .unwrap_or(false)
}

/// Computes the mirrored output location for one source file.
///
/// For `<input_root>/a/b/c.png` the output is `<output_root>/a/b/c.webp`.
pub fn mirrored_output_path(
    input_root: &Path,
    output_root: &Path,
    source: &Path,
) -> CoreResult<PlannedConversion> {
    let source_rel = source
        .strip_prefix(input_root)
        .map_err(|_| {
            CoreError::PathError(format!(
                "'{}' is not under the input root '{}'",
                source.display(),
                input_root.display()
            ))
        })?
        .to_path_buf();

    let stem = source.file_stem().ok_or_else(|| {
        CoreError::PathError(format!(
            "Could not determine file stem for '{}'",
            source.display()
        ))
    })?;

    let mut output_rel = source_rel.clone();
    output_rel.set_file_name(format!("{}.webp", stem.to_string_lossy()));
    let output = output_root.join(&output_rel);

    Ok(PlannedConversion {
        source: source.to_path_buf(),
        source_rel,
        output,
        output_rel,
    })
}

/// Filters the discovered files down to eligible ones and maps each to its
/// mirrored output path, rejecting output collisions.
///
/// # Returns
///
/// * `Ok(Vec<PlannedConversion>)` - One request per eligible file, in the
///   order the files were discovered
/// * `Err(CoreError::OutputCollision)` - If two eligible sources map to the
///   same output path
pub fn plan_conversions(
    input_root: &Path,
    output_root: &Path,
    files: &[PathBuf],
    extensions: &[String],
) -> CoreResult<Vec<PlannedConversion>> {
    let mut planned = Vec::new();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    for file in files {
        if !is_eligible(file, extensions) {
            continue;
        }

        let request = mirrored_output_path(input_root, output_root, file)?;

        if let Some(first) = claimed.get(&request.output) {
            return Err(CoreError::OutputCollision {
                first: first.clone(),
                second: request.source,
                output: request.output,
            });
        }
        claimed.insert(request.output.clone(), request.source.clone());
        planned.push(request);
    }

    Ok(planned)
}
