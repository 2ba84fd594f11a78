//! Output queue holding the bytes of the most recently decoded run.

use crate::constants::OUTPUT_QUEUE_SIZE;

/// Fixed-capacity buffer for one run's worth of output.
///
/// Invariant: `pos <= len <= OUTPUT_QUEUE_SIZE`.
#[derive(Debug, Clone)]
pub struct OutputQueue {
    buf: [u8; OUTPUT_QUEUE_SIZE],
    len: usize,
    pos: usize,
}

impl Default for OutputQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            buf: [0; OUTPUT_QUEUE_SIZE],
            len: 0,
            pos: 0,
        }
    }

    /// Discard the contents ahead of a new run.
    pub fn clear(&mut self) {
        self.len = 0;
        self.pos = 0;
    }

    /// Append one decoded byte.
    ///
    /// A run can never produce more than `OUTPUT_QUEUE_SIZE` bytes, so the
    /// queue cannot overflow between two `clear` calls.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }

    /// Bytes produced by the current run, drained or not.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the current run produced nothing.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every produced byte has been handed out.
    pub fn is_drained(&self) -> bool {
        self.pos >= self.len
    }

    /// Bytes produced but not yet handed out.
    pub fn pending(&self) -> &[u8] {
        &self.buf[self.pos..self.len]
    }

    /// Copy as many pending bytes as fit into `dest`, returning the count.
    pub fn drain_into(&mut self, dest: &mut [u8]) -> usize {
        let n = dest.len().min(self.len - self.pos);
        dest[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        n
    }
}
