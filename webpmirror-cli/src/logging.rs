// webpmirror-cli/src/logging.rs
//
// Logging initialization for the webpmirror CLI.
//
// User-facing progress goes through the terminal module; the standard `log`
// facade with env_logger carries diagnostic detail, controlled by RUST_LOG:
// - RUST_LOG=warn (default): warnings and errors only
// - RUST_LOG=debug: run configuration and per-stage detail

use env_logger::Env;

/// Initializes env_logger with a `warn` default so diagnostic logging stays
/// out of the way of terminal progress output unless requested.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
