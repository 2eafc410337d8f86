//! The directory-mirroring conversion pipeline.
//!
//! One linear pass: resolve roots, discover files, plan the eligible
//! conversions, then process each file fully before the next begins. Every
//! per-file decision (skip, convert, fail) is reported through the injected
//! reporter; per-file codec and write failures never abort the run, while
//! discovery, planning, and directory-creation failures do.
//!
//! With `jobs > 1` the independent per-file units fan out over a bounded
//! rayon pool. Directory creation stays idempotent (`create_dir_all`) and
//! the skip-if-exists check is best-effort under concurrent writers.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::debug;
use rayon::prelude::*;

use crate::config::CoreConfig;
use crate::discovery::find_all_files;
use crate::encoding::encode_webp;
use crate::error::{CoreError, CoreResult};
use crate::mapping::{PlannedConversion, plan_conversions};
use crate::progress::ProgressReporter;
use crate::temp_files::persist_atomically;
use crate::utils::get_filename_safe;
use crate::{ConvertResult, RunSummary};

/// Outcome of one file's processing step.
#[derive(Debug)]
enum FileOutcome {
    Converted(ConvertResult),
    Skipped,
    Failed,
}

/// Converts every eligible file under the configured input tree, mirroring
/// the directory structure under the output tree.
///
/// # Arguments
///
/// * `config` - The run configuration; validated before anything else
/// * `reporter` - Receiver for scan, count, and per-file events
///
/// # Returns
///
/// * `Ok(RunSummary)` - Counts and per-file statistics once all discovered
///   files have been processed (converted, skipped, or failed)
/// * `Err(CoreError)` - Only for run-fatal conditions: invalid
///   configuration, an unreadable input root, a traversal failure, an
///   output collision, or an output-subdirectory creation failure
pub fn convert_directory(
    config: &CoreConfig,
    reporter: &dyn ProgressReporter,
) -> CoreResult<RunSummary> {
    config.validate()?;

    let input_root = config.input_dir.canonicalize().map_err(|e| {
        CoreError::PathError(format!(
            "Invalid input path '{}': {}",
            config.input_dir.display(),
            e
        ))
    })?;
    let output_root = std::path::absolute(&config.output_dir)?;

    reporter.looking(&input_root);

    let files = find_all_files(&input_root)?;
    // The reported count is pre-filter: it includes files the extension
    // allow-list will silently exclude.
    reporter.found(files.len());

    let plan = plan_conversions(&input_root, &output_root, &files, &config.extensions)?;
    debug!(
        "planned {} conversion(s) out of {} discovered file(s)",
        plan.len(),
        files.len()
    );

    let outcomes: Vec<FileOutcome> = if config.jobs <= 1 {
        let mut outcomes = Vec::with_capacity(plan.len());
        for request in &plan {
            outcomes.push(process_one(request, config.quality, reporter)?);
        }
        outcomes
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()
            .map_err(|e| {
                CoreError::OperationFailed(format!("Failed to initialize thread pool: {e}"))
            })?;
        pool.install(|| {
            plan.par_iter()
                .map(|request| process_one(request, config.quality, reporter))
                .collect::<CoreResult<Vec<FileOutcome>>>()
        })?
    };

    let mut summary = RunSummary {
        discovered: files.len(),
        converted: Vec::new(),
        skipped: 0,
        failed: 0,
    };
    for outcome in outcomes {
        match outcome {
            FileOutcome::Converted(result) => summary.converted.push(result),
            FileOutcome::Skipped => summary.skipped += 1,
            FileOutcome::Failed => summary.failed += 1,
        }
    }

    Ok(summary)
}

/// Processes a single planned conversion: ensure the output subdirectory,
/// skip if the output exists, otherwise encode and write atomically.
///
/// Returns `Err` only for the run-fatal directory-creation case; codec and
/// write failures are reported and folded into the outcome.
fn process_one(
    request: &PlannedConversion,
    quality: u8,
    reporter: &dyn ProgressReporter,
) -> CoreResult<FileOutcome> {
    let output_dir = request.output.parent().ok_or_else(|| {
        CoreError::PathError(format!(
            "Could not determine output directory for '{}'",
            request.output.display()
        ))
    })?;
    fs::create_dir_all(output_dir)?;

    if request.output.exists() {
        reporter.skipped(&get_filename_safe(&request.output)?);
        return Ok(FileOutcome::Skipped);
    }

    let start = Instant::now();
    match encode_and_write(&request.source, &request.output, quality) {
        Ok((input_size, output_size)) => {
            reporter.success(&request.source_rel, &request.output_rel);
            Ok(FileOutcome::Converted(ConvertResult {
                filename: get_filename_safe(&request.source)?,
                duration: start.elapsed(),
                input_size,
                output_size,
            }))
        }
        Err(e) => {
            reporter.error(&request.source_rel, &e);
            Ok(FileOutcome::Failed)
        }
    }
}

/// Encodes `source` to WebP and persists the bytes at `output`.
/// Returns (input size, output size) in bytes.
fn encode_and_write(source: &Path, output: &Path, quality: u8) -> CoreResult<(u64, u64)> {
    let input_size = fs::metadata(source)?.len();
    let bytes = encode_webp(source, quality)?;
    persist_atomically(output, &bytes)?;
    Ok((input_size, bytes.len() as u64))
}
