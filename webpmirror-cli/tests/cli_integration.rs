// webpmirror-cli/tests/cli_integration.rs
//
// Argument-parsing tests for the convert subcommand.

use std::path::PathBuf;

use clap::Parser;
use webpmirror_cli::cli::{Cli, Commands};

#[test]
fn test_parse_convert_defaults() {
    let cli = Cli::parse_from(["webpmirror", "convert"]);

    match cli.command {
        Commands::Convert(args) => {
            assert_eq!(args.input_dir, PathBuf::from("public/images"));
            assert_eq!(args.output_dir, PathBuf::from("public/webp"));
            assert!(args.quality.is_none());
            assert!(args.extensions.is_none());
            assert!(args.jobs.is_none());
            assert!(!args.quiet);
        }
    }
}

#[test]
fn test_parse_convert_explicit_paths() {
    let cli = Cli::parse_from([
        "webpmirror",
        "convert",
        "--input",
        "assets/img",
        "--output",
        "dist/webp",
    ]);

    match cli.command {
        Commands::Convert(args) => {
            assert_eq!(args.input_dir, PathBuf::from("assets/img"));
            assert_eq!(args.output_dir, PathBuf::from("dist/webp"));
        }
    }
}

#[test]
fn test_parse_convert_short_flags() {
    let cli = Cli::parse_from(["webpmirror", "convert", "-i", "in", "-o", "out"]);

    match cli.command {
        Commands::Convert(args) => {
            assert_eq!(args.input_dir, PathBuf::from("in"));
            assert_eq!(args.output_dir, PathBuf::from("out"));
        }
    }
}

#[test]
fn test_parse_convert_options() {
    let cli = Cli::parse_from([
        "webpmirror",
        "convert",
        "--quality",
        "80",
        "--extensions",
        "jpg,png",
        "--jobs",
        "4",
        "--quiet",
    ]);

    match cli.command {
        Commands::Convert(args) => {
            assert_eq!(args.quality, Some(80));
            assert_eq!(
                args.extensions,
                Some(vec!["jpg".to_string(), "png".to_string()])
            );
            assert_eq!(args.jobs, Some(4));
            assert!(args.quiet);
        }
    }
}

#[test]
fn test_parse_convert_rejects_out_of_range_quality() {
    let result = Cli::try_parse_from(["webpmirror", "convert", "--quality", "101"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_requires_subcommand() {
    let result = Cli::try_parse_from(["webpmirror"]);
    assert!(result.is_err());
}
