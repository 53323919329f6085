//! Header line matching and line classification.

use regex::Regex;

/// Result of matching one line against the header patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum HeaderMatch {
    /// Not a header line.
    None,
    /// An old-file header (`--- a/path`), carrying the cleaned path.
    OldFile(String),
    /// A new-file header (`+++ b/path`), carrying the cleaned path.
    NewFile(String),
    /// A combined one-line header carrying both paths.
    Combined { old: String, new: String },
}

/// Compiled header patterns for efficient matching.
///
/// Create once per parse; the patterns are fixed, only their compilation
/// is deferred to runtime.
pub(super) struct HeaderPatterns {
    /// `--- ` followed by an optionally quoted old-side prefixed path.
    old_file: Regex,
    /// `+++ ` followed by an optionally quoted new-side prefixed path.
    new_file: Regex,
    /// `diff --<word>` carrying both prefixed paths on one line.
    combined: Regex,
}

impl HeaderPatterns {
    pub(super) fn new() -> Self {
        Self {
            old_file: Regex::new(r#"^-{3} "?[aiwco1]/(.*)$"#).expect("old-file pattern compiles"),
            new_file: Regex::new(r#"^\+{3} "?[biwco2]/(.*)$"#).expect("new-file pattern compiles"),
            combined: Regex::new(r#"^diff --\w+ "?[aiwco1]/(.*) "?[biwco2]/(.*)$"#)
                .expect("combined pattern compiles"),
        }
    }

    /// Classify one line as a header (or not).
    ///
    /// The combined one-line form is only attempted when `combined_headers`
    /// is set, and takes precedence over the two-line form. The combined
    /// pattern is anchored to `diff --<word>` lines; matching it against
    /// arbitrary lines would false-positive on content mentioning ` a/x b/y`.
    pub(super) fn match_line(&self, line: &str, combined_headers: bool) -> HeaderMatch {
        if combined_headers {
            if let Some(caps) = self.combined.captures(line) {
                return HeaderMatch::Combined {
                    old: clean_path(&caps[1]),
                    new: clean_path(&caps[2]),
                };
            }
        }

        if let Some(caps) = self.old_file.captures(line) {
            return HeaderMatch::OldFile(clean_path(&caps[1]));
        }

        if let Some(caps) = self.new_file.captures(line) {
            return HeaderMatch::NewFile(clean_path(&caps[1]));
        }

        HeaderMatch::None
    }
}

/// Whether a line is diff content (as opposed to tool metadata).
///
/// Content lines start with one of ` `, `-`, `+`, `@`; everything else
/// (warnings, banners, "no newline" markers, index lines) is metadata.
/// Pure over the line text, independent of any encoder.
pub(super) fn is_diff_content(line: &str) -> bool {
    matches!(line.as_bytes().first(), Some(b' ' | b'-' | b'+' | b'@'))
}

/// Clean a captured header path: trim whitespace, then strip any
/// surrounding double quotes.
///
/// The patterns allow an optional quote on either side, so the capture
/// may carry a trailing (or no) quote; cleanup is symmetric rather than
/// requiring balanced quotes.
fn clean_path(capture: &str) -> String {
    capture.trim().trim_matches('"').to_string()
}
