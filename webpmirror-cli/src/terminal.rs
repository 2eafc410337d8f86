// webpmirror-cli/src/terminal.rs
//
// Terminal output: styling constants, the progress reporter implementation,
// and the end-of-run summary rendering. All user-facing formatting decisions
// live here; the core library only emits events.

use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::error;

use webpmirror_core::progress::ProgressReporter;
use webpmirror_core::{
    ConvertResult, CoreError, RunSummary, calculate_size_reduction, format_bytes,
    format_duration,
};

/// Styling constants for terminal output
pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const ERROR_SYMBOL: &str = "✗";
    pub const SKIP_SYMBOL: &str = "·";
    pub const PROCESSING_SYMBOL: &str = "»";

    pub const STATUS_INDENT: &str = "  ";
}

/// Progress reporter rendering per-file events as styled terminal lines.
///
/// A hidden or visible spinner carries the "still working" signal; event
/// lines are routed through `ProgressBar::println` so they never interleave
/// with the spinner redraw. In quiet mode every category except per-file
/// errors is dropped, matching the converter's verbose switch.
pub struct TerminalReporter {
    quiet: bool,
    interactive: bool,
    spinner: ProgressBar,
}

impl TerminalReporter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let interactive = !quiet && console::Term::stdout().is_term();
        let spinner = if interactive {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .expect("static spinner template is valid"),
            );
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner
        } else {
            // A hidden bar swallows println output; plain stdout is used
            // instead when there is no terminal to animate.
            ProgressBar::hidden()
        };
        Self {
            quiet,
            interactive,
            spinner,
        }
    }

    /// Clears the spinner once the run is over.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn line(&self, text: String) {
        if self.quiet {
            return;
        }
        if self.interactive {
            self.spinner.println(text);
        } else {
            println!("{text}");
        }
    }
}

impl ProgressReporter for TerminalReporter {
    fn looking(&self, input_dir: &Path) {
        self.spinner.set_message("scanning");
        self.line(format!(
            "{} Looking inside: {}",
            style(styling::PROCESSING_SYMBOL).bold(),
            input_dir.display()
        ));
    }

    fn found(&self, count: usize) {
        self.spinner.set_message("converting");
        self.line(format!("{}Found {} files", styling::STATUS_INDENT, count));
    }

    fn success(&self, source_rel: &Path, output_rel: &Path) {
        self.line(format!(
            "{} Converted: {} -> {}",
            style(styling::SUCCESS_SYMBOL).green(),
            source_rel.display(),
            output_rel.display()
        ));
    }

    fn skipped(&self, output_name: &str) {
        self.line(format!(
            "{} Skipped: {} (already exists)",
            style(styling::SKIP_SYMBOL).dim(),
            output_name
        ));
    }

    fn error(&self, source_rel: &Path, err: &CoreError) {
        // Failures are surfaced even in quiet mode.
        let message = format!(
            "{} Failed to convert: {} ({})",
            style(styling::ERROR_SYMBOL).red().bold(),
            source_rel.display(),
            err
        );
        if self.interactive {
            self.spinner.suspend(|| eprintln!("{message}"));
        } else {
            eprintln!("{message}");
        }
        error!("conversion failed for {}: {}", source_rel.display(), err);
    }
}

/// Prints a key-value status line.
pub fn print_status(label: &str, value: &str) {
    let padding = if label.len() < 18 { 18 - label.len() } else { 1 };
    let spacer = " ".repeat(padding);
    println!(
        "{}{}:{}{}",
        styling::STATUS_INDENT,
        style(label).bold(),
        spacer,
        value
    );
}

/// Prints the per-file and aggregate summary block for a completed run.
pub fn print_run_summary(summary: &RunSummary, total_elapsed: Duration) {
    if !summary.converted.is_empty() {
        println!();
        println!("{}", style("Conversion Summary:").bold());
        for result in &summary.converted {
            print_converted_file(result);
        }
    }

    println!();
    print_status("Files found", &summary.discovered.to_string());
    print_status("Converted", &summary.converted.len().to_string());
    print_status("Skipped", &summary.skipped.to_string());
    print_status("Failed", &summary.failed.to_string());
    print_status("Total time", &format_duration(total_elapsed));
}

fn print_converted_file(result: &ConvertResult) {
    let reduction = calculate_size_reduction(result.input_size, result.output_size);
    println!();
    println!("{}", style(&result.filename).bold());
    println!("  {:<13} {}", "Encode time:", format_duration(result.duration));
    println!("  {:<13} {}", "Input size:", format_bytes(result.input_size));
    println!("  {:<13} {}", "Output size:", format_bytes(result.output_size));
    println!("  {:<13} {}%", "Reduced by:", reduction);
}
