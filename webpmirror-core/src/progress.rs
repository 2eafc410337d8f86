//! Progress reporting API for the core library.
//!
//! The pipeline reports each decision through an injectable reporter rather
//! than printing directly, so the CLI can render styled terminal output and
//! tests can capture events. The five categories mirror the tool's logging
//! surface: scan started, file count, per-file success, per-file skip, and
//! per-file failure.

use std::path::Path;

use crate::error::CoreError;

/// Receiver for per-run and per-file conversion events.
///
/// Implementations must be `Send + Sync`; when the pipeline fans out over a
/// worker pool, per-file events arrive from multiple threads.
pub trait ProgressReporter: Send + Sync {
    /// A scan of `input_dir` is starting.
    fn looking(&self, input_dir: &Path);

    /// Discovery finished; `count` is the number of files found before
    /// extension filtering.
    fn found(&self, count: usize);

    /// One file was converted and written.
    fn success(&self, source_rel: &Path, output_rel: &Path);

    /// One file was skipped because its output already exists.
    fn skipped(&self, output_name: &str);

    /// One file failed to convert; the run continues.
    fn error(&self, source_rel: &Path, error: &CoreError);
}

/// Reporter that discards every event. Used for quiet runs and as a test
/// stand-in where output is irrelevant.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn looking(&self, _input_dir: &Path) {}
    fn found(&self, _count: usize) {}
    fn success(&self, _source_rel: &Path, _output_rel: &Path) {}
    fn skipped(&self, _output_name: &str) {}
    fn error(&self, _source_rel: &Path, _error: &CoreError) {}
}
