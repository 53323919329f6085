//! Unified diff stream splitting for patchsplit.
//!
//! This module segments the raw output of a version-control diff operation
//! — potentially many concatenated per-file diffs — into discrete patch
//! records. It supports:
//! - File-header boundary detection across prefix conventions
//!   (`a/`, `b/`, `i/`, `w/`, `c/`, `o/`, `1/`, `2/`) with optional quoting
//! - A combined one-line header form (`diff --git a/x b/y`) as an opt-in
//!   extension for dialects that carry both paths on a single line
//! - Per-line dual-encoding re-interpretation: content lines under the
//!   repository content encoding, metadata lines under the system encoding
//! - Best-effort association: malformed headers and stray lines are never
//!   errors
//!
//! The parsing is deterministic, synchronous, and holds no state across
//! invocations.

mod api;
mod header;
mod splitter;


// Re-export public API
pub use api::{Patch, SplitOptions, split_patches, split_patches_with};
