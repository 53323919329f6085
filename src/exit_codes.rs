//! Exit code constants for the patchsplit CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Re-encoding failure (wrong encoding identifiers for the stream)
//! - 3: I/O failure (input unreadable, output unwritable)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Re-encoding failure: a line could not be reinterpreted under the
/// configured content or system encoding.
pub const ENCODING_FAILURE: i32 = 2;

/// I/O failure: reading the diff stream or writing patch files failed.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, ENCODING_FAILURE, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(ENCODING_FAILURE, 2);
        assert_eq!(IO_FAILURE, 3);
    }
}
