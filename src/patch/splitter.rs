//! Core splitting logic: the line loop and the open-patch accumulator.

use crate::encoding::{EncodingConfig, reencode_from_lossless};
use crate::error::Result;

use super::api::{Patch, SplitOptions};
use super::header::{HeaderMatch, HeaderPatterns, is_diff_content};

/// Split a losslessly decoded diff stream into patch records.
///
/// Walks the input line by line with a lookahead of one: a patch starts
/// when an old-file header is immediately followed by a new-file header
/// (or, with `combined_headers`, when a combined one-line header matches —
/// that form wins and consumes a single line). The in-progress patch is
/// carried as an explicit accumulator and moved into the output when the
/// next header pair is recognized or the input ends.
///
/// Lines seen before the first header belong to no file and are dropped.
/// Every appended line is re-encoded under the encoding selected by its
/// own classification; a re-encoding failure aborts the whole parse.
pub(super) fn split_from_lossless(
    raw: &str,
    encodings: &EncodingConfig,
    options: &SplitOptions,
) -> Result<Vec<Patch>> {
    let patterns = HeaderPatterns::new();
    let lines: Vec<&str> = raw.split('\n').collect();
    let last = lines.len() - 1;

    let mut patches: Vec<Patch> = Vec::new();
    let mut open: Option<Patch> = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        match patterns.match_line(line, options.combined_headers) {
            HeaderMatch::Combined { old, new } => {
                if let Some(done) = open.take() {
                    patches.push(done);
                }
                let mut patch = Patch::new(old, new);
                append_line(&mut patch, line, i == last, encodings)?;
                open = Some(patch);
                i += 1;
                continue;
            }
            HeaderMatch::OldFile(old) => {
                let next = lines
                    .get(i + 1)
                    .map(|next| patterns.match_line(next, options.combined_headers));
                if let Some(HeaderMatch::NewFile(new)) = next {
                    if let Some(done) = open.take() {
                        patches.push(done);
                    }
                    let mut patch = Patch::new(old, new);
                    append_line(&mut patch, line, i == last, encodings)?;
                    append_line(&mut patch, lines[i + 1], i + 1 == last, encodings)?;
                    open = Some(patch);
                    i += 2;
                    continue;
                }
                // Old-file header with no matching new-file line: not a
                // boundary, falls through to body handling.
            }
            HeaderMatch::NewFile(_) | HeaderMatch::None => {}
        }

        if let Some(patch) = open.as_mut() {
            append_line(patch, line, i == last, encodings)?;
        }
        i += 1;
    }

    if let Some(done) = open {
        patches.push(done);
    }

    Ok(patches)
}

/// Re-encode one line under the encoding its classification selects and
/// append it to the patch body.
///
/// A separator is re-inserted after every line except the very last line
/// of the input, so the final patch body ends exactly where the stream did.
fn append_line(
    patch: &mut Patch,
    line: &str,
    is_last_input_line: bool,
    encodings: &EncodingConfig,
) -> Result<()> {
    let target = if is_diff_content(line) {
        encodings.content
    } else {
        encodings.system
    };

    let decoded = reencode_from_lossless(line, target)?;
    patch.body.push_str(&decoded);
    if !is_last_input_line {
        patch.body.push('\n');
    }

    Ok(())
}
