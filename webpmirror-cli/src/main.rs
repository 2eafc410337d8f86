// webpmirror-cli/src/main.rs
//
// Binary entry point: parse arguments, dispatch the subcommand, and map a
// run-fatal error to a styled stderr line and a non-zero exit code.
// Per-file conversion failures are handled inside the run and never reach
// this level.

use std::process;

use clap::Parser;
use console::style;

use webpmirror_cli::cli::{Cli, Commands};
use webpmirror_cli::commands::convert::run_convert;
use webpmirror_cli::logging;

fn main() {
    logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => run_convert(args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        process::exit(1);
    }
}
