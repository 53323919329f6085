//! Public API for diff stream splitting.

use serde::Serialize;

use crate::encoding::EncodingConfig;
use crate::error::Result;

use super::splitter::split_from_lossless;

/// One logically distinct file change found in a diff stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patch {
    /// The "before" path, with diff-convention prefix (`a/`, `i/`, `w/`,
    /// `c/`, `o/`, `1/`) stripped and surrounding quotes removed.
    pub file_name_a: String,
    /// The "after" path, same rules with prefixes (`b/`, `i/`, `w/`,
    /// `c/`, `o/`, `2/`).
    pub file_name_b: String,
    /// The full diff text for this file: header lines, hunk headers and
    /// content lines, with the input's line terminators reconstructed.
    pub body: String,
}

impl Patch {
    pub(super) fn new(file_name_a: String, file_name_b: String) -> Self {
        Self {
            file_name_a,
            file_name_b,
            body: String::new(),
        }
    }

    /// Ordered view of the body as individual lines.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.body.lines()
    }
}

/// Parser extensions beyond the two-line header convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Recognize combined one-line headers (`diff --git a/x b/y`) as patch
    /// boundaries. Off by default: standard git output carries both the
    /// combined line and the `---`/`+++` pair, and recognizing both would
    /// split one file change into two records.
    pub combined_headers: bool,
}

/// Split a raw multi-file diff stream into ordered patch records.
///
/// The input must be a losslessly decoded string (see
/// [`crate::encoding::decode_lossless`]): each line is re-decoded under
/// the content encoding if it is diff content (` `, `-`, `+`, `@`
/// prefixed) or the system encoding otherwise, exactly once, as it is
/// appended to a patch body.
///
/// Malformed or unrecognized header lines are not errors; they associate
/// with the currently open patch (or are dropped before the first header).
/// Input with no recognizable headers yields an empty Vec.
///
/// # Arguments
///
/// * `raw` - The losslessly decoded diff stream (split on `\n` only)
/// * `encodings` - Content and system encodings for re-decoding
///
/// # Returns
///
/// * `Ok(Vec<Patch>)` - Patch records in input order
/// * `Err(SplitError::EncodingError)` - `raw` was not a lossless string;
///   the whole parse aborts, no partial result is returned
pub fn split_patches(raw: &str, encodings: &EncodingConfig) -> Result<Vec<Patch>> {
    split_patches_with(raw, encodings, &SplitOptions::default())
}

/// Split a diff stream with explicit parser options.
///
/// Same contract as [`split_patches`], with [`SplitOptions`] controlling
/// the combined one-line header extension.
pub fn split_patches_with(
    raw: &str,
    encodings: &EncodingConfig,
    options: &SplitOptions,
) -> Result<Vec<Patch>> {
    split_from_lossless(raw, encodings, options)
}
