//! Command implementations for patchsplit.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared input pipeline: read the raw stream,
//! decode it losslessly, resolve the encoding settings, and split.

use crate::cli::{Command, InputArgs, ListArgs, OutputFormat, SplitArgs};
use crate::config::Config;
use crate::encoding::{EncodingConfig, decode_lossless};
use crate::error::{Result, SplitError};
use crate::patch::{Patch, SplitOptions, split_patches_with};
use serde_json::json;
use std::io::Read;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::List(args) => cmd_list(args),
        Command::Split(args) => cmd_split(args),
    }
}

/// Print the file pairs found in the stream, one patch per line.
fn cmd_list(args: ListArgs) -> Result<()> {
    let patches = read_and_split(&args.input)?;

    for patch in &patches {
        match args.format {
            OutputFormat::Text => {
                println!("{} -> {}", patch.file_name_a, patch.file_name_b);
            }
            OutputFormat::Json => {
                let record = json!({
                    "file_name_a": patch.file_name_a,
                    "file_name_b": patch.file_name_b,
                    "lines": patch.lines().count(),
                });
                println!("{}", record);
            }
        }
    }

    Ok(())
}

/// Write each patch to a numbered .patch file under the output directory.
fn cmd_split(args: SplitArgs) -> Result<()> {
    let patches = read_and_split(&args.input)?;

    std::fs::create_dir_all(&args.output_dir)?;
    for (index, patch) in patches.iter().enumerate() {
        let path = args.output_dir.join(patch_file_name(index + 1, patch));
        std::fs::write(&path, patch.body.as_bytes())?;
        println!("wrote {}", path.display());
    }

    println!("{} patch(es) written", patches.len());
    Ok(())
}

/// Shared input pipeline: settings resolution, raw read, lossless decode,
/// split.
fn read_and_split(input: &InputArgs) -> Result<Vec<Patch>> {
    let config = match &input.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // CLI flags override file values.
    let content = input
        .content_encoding
        .as_deref()
        .unwrap_or(&config.content_encoding);
    let system = input
        .system_encoding
        .as_deref()
        .unwrap_or(&config.system_encoding);
    let encodings = EncodingConfig::from_labels(content, system)?;
    let options = SplitOptions {
        combined_headers: input.combined_headers || config.combined_headers,
    };

    let bytes = read_input(&input.input)?;
    let raw = decode_lossless(&bytes);
    split_patches_with(&raw, &encodings, &options)
}

/// Read the raw diff stream from a file path or stdin (`-`).
fn read_input(source: &str) -> Result<Vec<u8>> {
    if source == "-" {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        return Ok(buffer);
    }

    std::fs::read(Path::new(source)).map_err(|e| {
        SplitError::UserError(format!("failed to read diff stream '{}': {}", source, e))
    })
}

/// File name for the Nth patch: `NNNN-<name>.patch`, path separators
/// flattened so the name stays inside the output directory.
fn patch_file_name(number: usize, patch: &Patch) -> String {
    let base = if patch.file_name_b.is_empty() {
        &patch.file_name_a
    } else {
        &patch.file_name_b
    };
    let base = if base.is_empty() { "unnamed" } else { base };

    let sanitized: String = base
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();

    format!("{:04}-{}.patch", number, sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::io::Write;

    fn split_args(extra: &[&str]) -> SplitArgs {
        let mut argv = vec!["patchsplit", "split"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Split(args) => args,
            _ => panic!("Expected Split command"),
        }
    }

    #[test]
    fn patch_file_names_are_numbered_and_flat() {
        let patch = Patch {
            file_name_a: "src/old.rs".to_string(),
            file_name_b: "src/new.rs".to_string(),
            body: String::new(),
        };

        assert_eq!(patch_file_name(3, &patch), "0003-src_new.rs.patch");
    }

    #[test]
    fn patch_file_name_falls_back_to_old_side() {
        let patch = Patch {
            file_name_a: "gone.txt".to_string(),
            file_name_b: String::new(),
            body: String::new(),
        };

        assert_eq!(patch_file_name(1, &patch), "0001-gone.txt.patch");
    }

    #[test]
    fn split_writes_one_file_per_patch() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("changes.diff");
        let mut input = std::fs::File::create(&input_path).unwrap();
        write!(
            input,
            "--- a/foo.txt\n+++ b/foo.txt\n@@ -1 +1 @@\n-old\n+new\n\
             --- a/bar.txt\n+++ b/bar.txt\n@@ -1 +1 @@\n-x\n+y\n"
        )
        .unwrap();

        let out_dir = dir.path().join("out");
        let args = split_args(&[
            input_path.to_str().unwrap(),
            "--output-dir",
            out_dir.to_str().unwrap(),
        ]);
        cmd_split(args).unwrap();

        let first = std::fs::read_to_string(out_dir.join("0001-foo.txt.patch")).unwrap();
        let second = std::fs::read_to_string(out_dir.join("0002-bar.txt.patch")).unwrap();
        assert!(first.starts_with("--- a/foo.txt\n"));
        assert!(second.contains("+y"));
    }

    #[test]
    fn read_and_split_honors_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("patchsplit.yaml");
        std::fs::write(&config_path, "combined_headers: true\n").unwrap();

        let input_path = dir.path().join("changes.diff");
        std::fs::write(&input_path, "diff --git a/x b/x\n-1\n+1\n").unwrap();

        let args = split_args(&[
            input_path.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
        ]);
        let patches = read_and_split(&args.input).unwrap();

        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].file_name_b, "x");
    }

    #[test]
    fn missing_input_file_is_a_user_error() {
        let args = split_args(&["/nonexistent/changes.diff"]);
        let err = read_and_split(&args.input).unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    }
}
