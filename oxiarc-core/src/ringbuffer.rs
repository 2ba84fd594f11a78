//! Ring buffer (sliding window) for LZSS-family decompression.
//!
//! This module provides a circular buffer that maintains a history of recently
//! output bytes, allowing back-references to previously seen data during
//! decompression.
//!
//! Unlike DEFLATE-style codecs, the LArc/LHA LZSS methods address the window
//! by *absolute* position rather than by distance from the write cursor, and
//! they start from a pre-filled window instead of an empty one. Every index
//! goes through [`RingBuffer::wrap`], so no caller ever computes a wrapped
//! index on its own.
//!
//! # Sizes
//!
//! - LArc lz5: 4 KB (4096 bytes)

/// Common window sizes for LZSS methods.
pub mod sizes {
    /// Window size for LArc `-lz5-` (4 KB).
    pub const LARC_LZ5: usize = 4096;
}

/// A ring buffer (circular buffer) for maintaining decompression history.
///
/// The buffer stores the most recent `capacity` bytes of output data,
/// wrapping around when full.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    /// The underlying buffer.
    buffer: Vec<u8>,
    /// Current write position (next byte will be written here).
    position: usize,
    /// Mask for efficient modulo (capacity - 1).
    mask: usize,
}

impl RingBuffer {
    /// Create a ring buffer with every slot set to `fill`.
    ///
    /// The write position starts at 0; use [`set_position`](Self::set_position)
    /// for formats that begin writing elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not a power of 2 or is zero.
    pub fn filled(capacity: usize, fill: u8) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        assert!(
            capacity.is_power_of_two(),
            "Capacity must be a power of 2, got {}",
            capacity
        );

        Self {
            buffer: vec![fill; capacity],
            position: 0,
            mask: capacity - 1,
        }
    }

    /// Get the current write position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the write position. The index is wrapped into the window.
    pub fn set_position(&mut self, index: usize) {
        self.position = self.wrap(index);
    }

    /// Reduce any index into `0..capacity`.
    #[inline]
    pub fn wrap(&self, index: usize) -> usize {
        index & self.mask
    }

    /// Overwrite every slot with `fill` and rewind the write position to 0.
    pub fn fill(&mut self, fill: u8) {
        self.buffer.fill(fill);
        self.position = 0;
    }

    /// Write a single byte at the write position and advance it.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buffer[self.position] = byte;
        self.position = self.wrap(self.position + 1);
    }

    /// Read the byte at an absolute window index.
    ///
    /// The index is wrapped, so `capacity + 3` reads slot 3.
    #[inline]
    pub fn byte_at(&self, index: usize) -> u8 {
        self.buffer[self.wrap(index)]
    }
}
