//! Configuration structures and constants for the webpmirror-core library.
//!
//! Instances of `CoreConfig` are created by consumers of the library (like
//! webpmirror-cli) and passed to `convert_directory` to control a run. The
//! configuration is constructed once per invocation and is immutable for the
//! run's duration.

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

// ---- Default constants ----

/// Default directory scanned for source images.
pub const DEFAULT_INPUT_DIR: &str = "public/images";

/// Default directory the mirrored WebP tree is written under.
pub const DEFAULT_OUTPUT_DIR: &str = "public/webp";

/// Default WebP encoder quality (0-100, 100 is highest).
pub const DEFAULT_QUALITY: u8 = 100;

/// Default file-extension allow-list, matched case-insensitively.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "svg"];

/// Default number of concurrent conversion jobs. One job reproduces the
/// strictly sequential per-file loop.
pub const DEFAULT_JOBS: usize = 1;

/// Main configuration structure for the webpmirror-core library.
///
/// # Examples
///
/// ```rust,no_run
/// use webpmirror_core::CoreConfig;
/// use std::path::PathBuf;
///
/// let mut config = CoreConfig::new(
///     PathBuf::from("public/images"),
///     PathBuf::from("public/webp"),
/// );
/// config.quality = 80;
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory tree containing input image files to process
    pub input_dir: PathBuf,

    /// Directory the mirrored output tree is written under
    pub output_dir: PathBuf,

    /// WebP encoder quality, passed through to the codec unchanged (0-100)
    pub quality: u8,

    /// Lowercased extensions (without leading dot) eligible for conversion
    pub extensions: Vec<String>,

    /// Number of files converted concurrently (1 = sequential)
    pub jobs: usize,
}

impl CoreConfig {
    /// Creates a configuration with the default quality, extension list,
    /// and job count.
    #[must_use]
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            quality: DEFAULT_QUALITY,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            jobs: DEFAULT_JOBS,
        }
    }

    /// Replaces the extension allow-list, normalizing each entry.
    pub fn set_extensions<I, S>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
    }

    /// Validates the configuration, returning `CoreError::Config` on the
    /// first violated constraint.
    pub fn validate(&self) -> CoreResult<()> {
        if self.quality > 100 {
            return Err(CoreError::Config(format!(
                "quality must be between 0 and 100, got {}",
                self.quality
            )));
        }
        if self.extensions.is_empty() {
            return Err(CoreError::Config(
                "extension allow-list must not be empty".to_string(),
            ));
        }
        if self.extensions.iter().any(|e| e.is_empty()) {
            return Err(CoreError::Config(
                "extension allow-list contains an empty entry".to_string(),
            ));
        }
        if self.jobs == 0 {
            return Err(CoreError::Config(
                "jobs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Normalizes a user-supplied extension: strips a leading dot and lowercases.
/// Both ".JPG" and "jpg" become "jpg".
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = CoreConfig::new(PathBuf::from("in"), PathBuf::from("out"));
        assert_eq!(config.quality, 100);
        assert_eq!(config.extensions, vec!["jpg", "jpeg", "png", "svg"]);
        assert_eq!(config.jobs, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".JPG"), "jpg");
        assert_eq!(normalize_extension("jpeg"), "jpeg");
        assert_eq!(normalize_extension(" .Png "), "png");
        assert_eq!(normalize_extension(""), "");
    }

    #[test]
    fn test_set_extensions_normalizes() {
        let mut config = CoreConfig::new(PathBuf::from("in"), PathBuf::from("out"));
        config.set_extensions([".PNG", "Jpg"]);
        assert_eq!(config.extensions, vec!["png", "jpg"]);
    }

    #[test]
    fn test_validate_rejects_bad_quality() {
        let mut config = CoreConfig::new(PathBuf::from("in"), PathBuf::from("out"));
        config.quality = 101;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let mut config = CoreConfig::new(PathBuf::from("in"), PathBuf::from("out"));
        config.extensions.clear();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_jobs() {
        let mut config = CoreConfig::new(PathBuf::from("in"), PathBuf::from("out"));
        config.jobs = 0;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
