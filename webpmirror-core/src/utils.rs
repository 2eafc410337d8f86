//! Utility functions for formatting and file operations.
//!
//! General-purpose helpers used throughout the webpmirror-core library and
//! by the CLI's end-of-run summary: duration and byte formatting, size
//! reduction, and safe filename extraction.

use std::path::Path;
use std::time::Duration;

/// Formats a duration as HH:MM:SS (e.g., 3725s -> "01:02:05").
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Calculates the percentage size reduction from input to output.
/// Returns 0 if input_size is 0 or the output grew.
#[must_use]
pub fn calculate_size_reduction(input_size: u64, output_size: u64) -> u64 {
    if input_size == 0 || output_size >= input_size {
        0
    } else {
        100 - ((output_size * 100) / input_size)
    }
}

/// Safely extracts the filename from a path with consistent error handling.
pub fn get_filename_safe(path: &Path) -> crate::CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            crate::CoreError::PathError(format!("Failed to get filename for {}", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}
