//! History window (dictionary) for `-lz5-` decoding.

use crate::constants::{FILL_BYTE, START_OFFSET, WINDOW_SIZE};
use crate::queue::OutputQueue;
use oxiarc_core::RingBuffer;

/// The 4 KB circular dictionary that copy commands read from.
///
/// Every byte the decoder produces goes through [`append_byte`], which
/// records it in the window and hands it to the output queue.
///
/// [`append_byte`]: HistoryBuffer::append_byte
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    ring: RingBuffer,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// Create a window in the starting state.
    pub fn new() -> Self {
        let mut history = Self {
            ring: RingBuffer::filled(WINDOW_SIZE, FILL_BYTE),
        };
        history.init();
        history
    }

    /// Fill the window with spaces and park the cursor `START_OFFSET` bytes
    /// before the end, which is where encoders for this format expect it.
    pub fn init(&mut self) {
        self.ring.fill(FILL_BYTE);
        self.ring.set_position(WINDOW_SIZE - START_OFFSET);
    }

    /// Current write cursor.
    pub fn position(&self) -> usize {
        self.ring.position()
    }

    /// Byte stored at an absolute window index (wrapped).
    pub fn byte_at(&self, index: usize) -> u8 {
        self.ring.byte_at(index)
    }

    /// Emit one byte: store it at the cursor, advance, and queue it.
    #[inline]
    pub fn append_byte(&mut self, byte: u8, queue: &mut OutputQueue) {
        queue.push(byte);
        self.ring.write_byte(byte);
    }

    /// Replay `length` bytes starting at absolute index `start`.
    ///
    /// Strictly one byte at a time: each copied byte is written back at the
    /// cursor before the next source slot is read, so a source range that
    /// runs into the bytes being written repeats them.
    pub fn copy_range(&mut self, start: usize, length: usize, queue: &mut OutputQueue) {
        for i in 0..length {
            let byte = self.ring.byte_at(start + i);
            self.append_byte(byte, queue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let history = HistoryBuffer::new();

        assert_eq!(history.position(), 4096 - 18);
        assert!((0..WINDOW_SIZE).all(|i| history.byte_at(i) == b' '));
    }

    #[test]
    fn test_append_byte_writes_window_and_queue() {
        let mut history = HistoryBuffer::new();
        let mut queue = OutputQueue::new();
        let start = history.position();

        history.append_byte(b'A', &mut queue);
        history.append_byte(b'B', &mut queue);

        assert_eq!(history.byte_at(start), b'A');
        assert_eq!(history.byte_at(start + 1), b'B');
        assert_eq!(history.position(), start + 2);
        assert_eq!(queue.pending(), b"AB");
    }

    #[test]
    fn test_cursor_wraps_to_zero() {
        let mut history = HistoryBuffer::new();
        let mut queue = OutputQueue::new();

        for b in 0..START_OFFSET as u8 {
            history.append_byte(b, &mut queue);
        }
        assert_eq!(history.position(), 0);

        history.append_byte(0xAA, &mut queue);
        assert_eq!(history.byte_at(0), 0xAA);
        assert_eq!(history.byte_at(WINDOW_SIZE - 1), START_OFFSET as u8 - 1);
    }

    #[test]
    fn test_copy_overlapping_repeats_pattern() {
        let mut history = HistoryBuffer::new();
        let mut queue = OutputQueue::new();
        let p = history.position();

        history.append_byte(b'a', &mut queue);
        history.append_byte(b'b', &mut queue);
        history.copy_range(p, 7, &mut queue);

        assert_eq!(queue.pending(), b"ababababa");
    }

    #[test]
    fn test_copy_source_wraps() {
        let mut history = HistoryBuffer::new();
        let mut queue = OutputQueue::new();

        // Last two slots of the window and the first one.
        for b in *b"0123456789abcdefXY" {
            history.append_byte(b, &mut queue);
        }
        history.append_byte(b'Z', &mut queue);
        queue.clear();

        history.copy_range(WINDOW_SIZE - 2, 3, &mut queue);
        assert_eq!(queue.pending(), b"XYZ");
    }
}
