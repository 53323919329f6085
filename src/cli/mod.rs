//! CLI argument parsing for patchsplit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Patchsplit: encoding-aware splitter for multi-file unified diff streams.
///
/// Reads one diff stream (file or stdin), segments it into per-file patch
/// records, and re-decodes each line under the content or system encoding
/// depending on whether it is diff content or tool metadata.
#[derive(Parser, Debug)]
#[command(name = "patchsplit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for patchsplit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the file pairs found in a diff stream.
    ///
    /// Prints one `old -> new` line per patch, or NDJSON records with
    /// `--format json`.
    List(ListArgs),

    /// Split a diff stream into numbered per-file .patch files.
    ///
    /// Writes each patch body to `<output-dir>/NNNN-<name>.patch` in
    /// stream order.
    Split(SplitArgs),
}

/// Arguments shared by every command that reads a diff stream.
#[derive(Parser, Debug)]
pub struct InputArgs {
    /// Input file, or '-' to read the stream from stdin.
    #[arg(default_value = "-")]
    pub input: String,

    /// Encoding label for diff content lines (overrides the config file).
    #[arg(long, value_name = "LABEL")]
    pub content_encoding: Option<String>,

    /// Encoding label for tool metadata lines (overrides the config file).
    #[arg(long, value_name = "LABEL")]
    pub system_encoding: Option<String>,

    /// Recognize combined one-line headers (diff --git a/x b/y) as patch
    /// boundaries.
    #[arg(long)]
    pub combined_headers: bool,

    /// Path to a YAML settings file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the `split` command.
#[derive(Parser, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory the .patch files are written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

/// Output format for the `list` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable `old -> new` lines.
    Text,
    /// One JSON object per patch (NDJSON).
    Json,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list_defaults() {
        let cli = Cli::try_parse_from(["patchsplit", "list"]).unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.input.input, "-");
            assert_eq!(args.format, OutputFormat::Text);
            assert!(args.input.content_encoding.is_none());
            assert!(!args.input.combined_headers);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn parse_list_full() {
        let cli = Cli::try_parse_from([
            "patchsplit",
            "list",
            "changes.diff",
            "--content-encoding",
            "windows-1251",
            "--system-encoding",
            "utf-8",
            "--combined-headers",
            "--format",
            "json",
        ])
        .unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.input.input, "changes.diff");
            assert_eq!(args.input.content_encoding.as_deref(), Some("windows-1251"));
            assert_eq!(args.input.system_encoding.as_deref(), Some("utf-8"));
            assert!(args.input.combined_headers);
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn parse_split_with_output_dir() {
        let cli = Cli::try_parse_from(["patchsplit", "split", "-", "--output-dir", "out"]).unwrap();
        if let Command::Split(args) = cli.command {
            assert_eq!(args.input.input, "-");
            assert_eq!(args.output_dir, PathBuf::from("out"));
        } else {
            panic!("Expected Split command");
        }
    }
}
