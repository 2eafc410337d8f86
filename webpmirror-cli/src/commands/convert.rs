//! Implementation of the 'convert' subcommand.
//!
//! Wires CLI arguments into a `CoreConfig`, runs the core conversion
//! pipeline with a terminal reporter, and renders the end-of-run summary.

use crate::cli::ConvertArgs;
use crate::error::CliResult;
use crate::terminal::{self, TerminalReporter};

use webpmirror_core::{CoreConfig, convert_directory};

use std::time::Instant;

use log::{debug, warn};

/// Creates and configures a `CoreConfig` from CLI arguments.
fn create_core_config(args: &ConvertArgs) -> CliResult<CoreConfig> {
    let mut config = CoreConfig::new(args.input_dir.clone(), args.output_dir.clone());

    if let Some(quality) = args.quality {
        config.quality = quality;
    }

    if let Some(ref extensions) = args.extensions {
        config.set_extensions(extensions);
    }

    if let Some(jobs) = args.jobs {
        config.jobs = jobs;
    }

    config.validate()?;
    Ok(config)
}

/// Runs the convert subcommand end to end.
pub fn run_convert(args: ConvertArgs) -> CliResult<()> {
    let total_start_time = Instant::now();

    let config = create_core_config(&args)?;
    debug!("run configuration: {config:?}");

    if !args.quiet {
        println!("webpmirror run started: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        terminal::print_status("Input directory", &config.input_dir.display().to_string());
        terminal::print_status("Output directory", &config.output_dir.display().to_string());
        terminal::print_status("Quality", &config.quality.to_string());
        terminal::print_status("Extensions", &config.extensions.join(", "));
        if config.jobs > 1 {
            terminal::print_status("Jobs", &config.jobs.to_string());
        }
    }

    let reporter = TerminalReporter::new(args.quiet);
    let result = convert_directory(&config, &reporter);
    reporter.finish();
    let summary = result?;

    if summary.failed > 0 {
        warn!("{} file(s) failed to convert", summary.failed);
    }

    if !args.quiet {
        terminal::print_run_summary(&summary, total_start_time.elapsed());
        println!();
        println!("webpmirror run finished: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
