//! Lossless byte/string reinterpretation for diff streams.
//!
//! Diff output mixes bytes from two sources: file content (in the
//! repository's content encoding) and tool messages (in the host system
//! encoding). To defer the decision of which encoding applies to which
//! line, the raw bytes are first decoded *losslessly* — every byte maps
//! to the char with the same scalar value — and each line is later
//! re-decoded under the encoding its classification calls for.
//!
//! `reencode_from_lossless` is deterministic and total over byte input:
//! bytes that are invalid under the target encoding become U+FFFD rather
//! than failing. It only errors when given a string that was not produced
//! by `decode_lossless` (a char above U+00FF has no originating byte).

use crate::error::{Result, SplitError};
use encoding_rs::{Encoding, UTF_8};

/// The two encodings a diff stream is re-decoded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingConfig {
    /// Encoding for diff content lines (` `, `-`, `+`, `@` prefixed).
    pub content: &'static Encoding,
    /// Encoding for tool metadata and commentary lines.
    pub system: &'static Encoding,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            content: UTF_8,
            system: UTF_8,
        }
    }
}

impl EncodingConfig {
    /// Resolve an encoding pair from WHATWG labels (e.g. "utf-8",
    /// "windows-1251", "shift_jis").
    pub fn from_labels(content: &str, system: &str) -> Result<Self> {
        Ok(Self {
            content: encoding_for_label(content)?,
            system: encoding_for_label(system)?,
        })
    }
}

/// Look up an encoding by label, mapping unknown labels to a user error.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
        SplitError::UserError(format!(
            "unknown encoding label '{}'\n\
             Fix: use a WHATWG encoding label such as 'utf-8' or 'windows-1252'.",
            label
        ))
    })
}

/// Decode raw bytes into a byte-preserving string.
///
/// Each byte becomes the char with the same scalar value, so the original
/// byte sequence can always be recovered. This is the form the splitter
/// expects its input in.
pub fn decode_lossless(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Re-decode a losslessly decoded string under a target encoding.
///
/// Recovers the original bytes and decodes them with `target`, without
/// BOM handling. Errors if the string contains a char above U+00FF,
/// which means it did not come from `decode_lossless`.
pub fn reencode_from_lossless(lossless: &str, target: &'static Encoding) -> Result<String> {
    let mut bytes = Vec::with_capacity(lossless.len());
    for ch in lossless.chars() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(SplitError::EncodingError(format!(
                "char U+{:04X} has no originating byte; input is not a lossless string",
                code
            )));
        }
        bytes.push(code as u8);
    }

    let (decoded, _) = target.decode_without_bom_handling(&bytes);
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1251;

    #[test]
    fn lossless_decode_preserves_every_byte() {
        let bytes: Vec<u8> = (0..=255).collect();
        let lossless = decode_lossless(&bytes);

        let recovered: Vec<u8> = lossless.chars().map(|c| u32::from(c) as u8).collect();
        assert_eq!(recovered, bytes);
    }

    #[test]
    fn reencode_to_utf8_round_trips_ascii() {
        let lossless = decode_lossless(b"+added line");
        let decoded = reencode_from_lossless(&lossless, UTF_8).unwrap();
        assert_eq!(decoded, "+added line");
    }

    #[test]
    fn reencode_decodes_multibyte_utf8() {
        // "héllo" as UTF-8 bytes, decoded losslessly first.
        let lossless = decode_lossless("héllo".as_bytes());
        assert_ne!(lossless, "héllo"); // lossless form holds raw bytes

        let decoded = reencode_from_lossless(&lossless, UTF_8).unwrap();
        assert_eq!(decoded, "héllo");
    }

    #[test]
    fn target_encoding_changes_interpretation() {
        // 0xC0 is 'А' (Cyrillic) in windows-1251 but invalid alone in UTF-8.
        let lossless = decode_lossless(&[0xC0]);

        let as_1251 = reencode_from_lossless(&lossless, WINDOWS_1251).unwrap();
        assert_eq!(as_1251, "А");

        let as_utf8 = reencode_from_lossless(&lossless, UTF_8).unwrap();
        assert_eq!(as_utf8, "\u{FFFD}");
    }

    #[test]
    fn non_lossless_input_is_rejected() {
        let err = reencode_from_lossless("snowman \u{2603}", UTF_8).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::ENCODING_FAILURE);
    }

    #[test]
    fn unknown_label_is_a_user_error() {
        let err = encoding_for_label("utf-9").unwrap_err();
        assert!(err.to_string().contains("utf-9"));
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    }

    #[test]
    fn config_resolves_known_labels() {
        let config = EncodingConfig::from_labels("windows-1251", "utf-8").unwrap();
        assert_eq!(config.content, WINDOWS_1251);
        assert_eq!(config.system, UTF_8);
    }
}
