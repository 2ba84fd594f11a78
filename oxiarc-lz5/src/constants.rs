//! `-lz5-` format constants.
//!
//! These values are part of the format. Existing compressed data assumes
//! them exactly, so none of them is configurable.

use oxiarc_core::ringbuffer::sizes;

/// Method tag in LHA/LArc headers.
pub const METHOD_ID: &[u8; 5] = b"-lz5-";

/// Size of the history window.
pub const WINDOW_SIZE: usize = sizes::LARC_LZ5;

/// Distance of the initial write cursor from the end of the window.
pub const START_OFFSET: usize = 18;

/// Byte every window slot holds before decoding starts.
pub const FILL_BYTE: u8 = b' ';

/// Added to the stored 4-bit length field to get the copy length.
pub const THRESHOLD: usize = 3;

/// Longest copy a single command can request.
pub const MAX_MATCH: usize = 0x0F + THRESHOLD;

/// Commands addressed by one control byte.
pub const COMMANDS_PER_RUN: usize = 8;

/// Largest output one run can produce.
pub const OUTPUT_QUEUE_SIZE: usize = MAX_MATCH * COMMANDS_PER_RUN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_sizes() {
        assert_eq!(WINDOW_SIZE, 4096);
        assert_eq!(MAX_MATCH, 18);
        assert_eq!(OUTPUT_QUEUE_SIZE, 144);
        assert_eq!(WINDOW_SIZE - START_OFFSET, 0xFEE);
    }
}
