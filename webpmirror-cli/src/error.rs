// webpmirror-cli/src/error.rs
//
// CLI error handling: the CLI surfaces core errors directly, so its result
// type is an alias over the core's. Per-file failures never reach this
// level; only run-fatal errors do.

use webpmirror_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;
