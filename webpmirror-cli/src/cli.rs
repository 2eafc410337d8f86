// webpmirror-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use webpmirror_core::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "webpmirror: WebP conversion tool",
    long_about = "Converts image trees to WebP via the webpmirror-core library, \
                  mirroring the input directory structure under the output directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Converts image files from an input tree to a mirrored WebP output tree
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Directory tree containing the source images
    #[arg(short = 'i', long = "input", value_name = "INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory the mirrored .webp tree is written under
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Optional: WebP encoder quality (0-100, higher is larger/better)
    #[arg(long, value_name = "QUALITY", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,

    /// Optional: comma-separated extension allow-list (e.g. jpg,png,svg)
    #[arg(long = "extensions", value_delimiter = ',', value_name = "EXTS")]
    pub extensions: Option<Vec<String>>,

    /// Optional: number of concurrent conversion jobs (default 1, sequential)
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Suppress progress output; per-file failures are still printed
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
