//! Patchsplit: encoding-aware splitter for multi-file unified diff streams.
//!
//! The parsing core lives in [`patch`]: it segments one raw diff stream
//! into ordered [`patch::Patch`] records, re-decoding each line under the
//! repository content encoding or the host system encoding depending on
//! the line's classification. [`encoding`] holds the lossless byte/string
//! reinterpretation primitive; the remaining modules are CLI glue.

pub mod cli;
pub mod commands;
pub mod config;
pub mod encoding;
pub mod error;
pub mod exit_codes;
pub mod patch;
