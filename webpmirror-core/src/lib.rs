//! Core library for batch-converting image trees to WebP.
//!
//! This crate provides recursive file discovery, mirrored output-path
//! mapping, an image codec boundary (JPEG/PNG decode, SVG rasterization,
//! WebP encode), and the sequential (optionally parallel) conversion
//! pipeline, with per-file outcomes reported through an injectable
//! progress-reporting trait.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use webpmirror_core::{CoreConfig, NullReporter, convert_directory};
//! use std::path::PathBuf;
//!
//! let mut config = CoreConfig::new(
//!     PathBuf::from("public/images"),
//!     PathBuf::from("public/webp"),
//! );
//! config.quality = 85;
//! config.validate().unwrap();
//!
//! let summary = convert_directory(&config, &NullReporter).unwrap();
//! println!(
//!     "converted {}, skipped {}, failed {}",
//!     summary.converted.len(),
//!     summary.skipped,
//!     summary.failed
//! );
//! ```

pub mod config;
pub mod discovery;
pub mod encoding;
pub mod error;
pub mod mapping;
pub mod processing;
pub mod progress;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::CoreConfig;
pub use discovery::find_all_files;
pub use encoding::encode_webp;
pub use error::{CoreError, CoreResult};
pub use mapping::{PlannedConversion, is_eligible, mirrored_output_path, plan_conversions};
pub use processing::convert_directory;
pub use progress::{NullReporter, ProgressReporter};
pub use utils::{calculate_size_reduction, format_bytes, format_duration};

use std::time::Duration;

/// Result of a single successful conversion, containing statistics about
/// the encode.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub filename: String,
    pub duration: Duration,
    pub input_size: u64,
    pub output_size: u64,
}

/// Aggregate outcome of one run of `convert_directory`.
///
/// `discovered` counts every file discovery returned, before extension
/// filtering; the per-outcome fields cover eligible files only.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub discovered: usize,
    pub converted: Vec<ConvertResult>,
    pub skipped: u64,
    pub failed: u64,
}
