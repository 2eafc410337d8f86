//! Error types for the webpmirror-core library.
//!
//! Two classes of failure flow through the pipeline: run-fatal errors
//! (discovery, output-directory creation, configuration, output collisions)
//! propagate out of `convert_directory` and abort the run, while per-file
//! codec and write errors are caught at the per-file boundary, reported, and
//! never abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for webpmirror
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to render SVG '{}': {message}", path.display())]
    SvgRender { path: PathBuf, message: String },

    #[error("WebP encoding failed for '{}': {message}", path.display())]
    WebpEncode { path: PathBuf, message: String },

    #[error("Output collision: '{}' and '{}' both map to '{}'", first.display(), second.display(), output.display())]
    OutputCollision {
        first: PathBuf,
        second: PathBuf,
        output: PathBuf,
    },

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for webpmirror operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
