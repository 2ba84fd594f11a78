//! The `-lz5-` entry decoder.

use crate::constants::{METHOD_ID, OUTPUT_QUEUE_SIZE, WINDOW_SIZE};
use crate::history::HistoryBuffer;
use crate::queue::OutputQueue;
use crate::run::decode_run;
use oxiarc_core::error::{OxiArcError, Result};
use oxiarc_core::source::{ByteSource, SliceSource};
use oxiarc_core::traits::{DecompressStatus, Decompressor, EntryDecoder};

/// Counts bytes pulled from a source on their way into the run decoder.
struct Counted<'a, S: ?Sized> {
    inner: &'a mut S,
    pulled: u64,
}

impl<S: ByteSource + ?Sized> ByteSource for Counted<'_, S> {
    fn pull(&mut self, buf: &mut [u8]) -> bool {
        let ok = self.inner.pull(buf);
        if ok {
            self.pulled += buf.len() as u64;
        }
        ok
    }
}

/// Streaming decoder for one `-lz5-` compressed entry.
///
/// Output is produced a run at a time into a small queue and handed out in
/// whatever chunk sizes the caller asks for, so reads never need to line up
/// with run boundaries.
///
/// # Example
///
/// ```rust
/// use oxiarc_core::{EntryDecoder, SliceSource};
/// use oxiarc_lz5::Lz5Decoder;
///
/// let mut decoder = Lz5Decoder::new();
/// let mut source = SliceSource::new(b"\xFFLArc lz5");
/// let mut out = [0u8; 16];
///
/// let n = decoder.read(&mut out, &mut source);
/// assert_eq!(&out[..n], b"LArc lz5");
/// ```
#[derive(Debug, Clone)]
pub struct Lz5Decoder {
    history: HistoryBuffer,
    queue: OutputQueue,
    /// Compressed bytes pulled so far.
    total_in: u64,
    /// Decoded bytes handed to callers so far.
    total_out: u64,
    /// Set once a pull has failed.
    exhausted: bool,
}

impl Default for Lz5Decoder {
    fn default() -> Self {
        <Self as EntryDecoder>::new()
    }
}

impl Lz5Decoder {
    /// Create a decoder for the given method tag.
    ///
    /// Anything other than `-lz5-` is rejected.
    pub fn for_method(id: &[u8]) -> Result<Self> {
        if id != METHOD_ID {
            return Err(OxiArcError::unsupported_method_id(id));
        }
        Ok(Self::default())
    }

    /// Compressed bytes consumed so far.
    pub fn total_in(&self) -> u64 {
        self.total_in
    }

    /// Decoded bytes produced so far.
    pub fn total_out(&self) -> u64 {
        self.total_out
    }

    /// Whether the input has been observed to run dry.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The history window.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    fn refill<S: ByteSource + ?Sized>(&mut self, source: &mut S) {
        let mut counted = Counted {
            inner: source,
            pulled: 0,
        };
        // A failed run may still have queued output; it is handed out before
        // the decoder reports the end of the entry.
        let complete = decode_run(&mut counted, &mut self.history, &mut self.queue);
        self.total_in += counted.pulled;

        if !complete {
            tracing::debug!(
                "lz5: input exhausted after {} compressed bytes, {} bytes left to hand out",
                self.total_in,
                self.queue.len()
            );
            self.exhausted = true;
        }
    }
}

impl EntryDecoder for Lz5Decoder {
    const METHOD_ID: &'static [u8; 5] = METHOD_ID;

    const INSTANCE_SIZE: usize = std::mem::size_of::<Self>() + WINDOW_SIZE;

    fn new() -> Self {
        Self {
            history: HistoryBuffer::new(),
            queue: OutputQueue::new(),
            total_in: 0,
            total_out: 0,
            exhausted: false,
        }
    }

    fn init(&mut self) {
        self.history.init();
        self.queue.clear();
        self.total_in = 0;
        self.total_out = 0;
        self.exhausted = false;
    }

    fn read<S: ByteSource + ?Sized>(&mut self, dest: &mut [u8], source: &mut S) -> usize {
        let mut filled = 0;

        while filled < dest.len() {
            filled += self.queue.drain_into(&mut dest[filled..]);
            if filled == dest.len() {
                break;
            }

            // Queue drained and more output wanted. A source is never pulled
            // again once it has failed.
            if self.exhausted {
                break;
            }
            self.refill(source);
            if self.queue.is_empty() {
                break;
            }
        }

        self.total_out += filled as u64;
        filled
    }
}

impl Decompressor for Lz5Decoder {
    /// `input` must be the complete remainder of the compressed entry. Input
    /// that ends mid-run is treated as the end of the entry, exactly as a
    /// failing byte source would be.
    fn decompress(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(usize, usize, DecompressStatus)> {
        if self.exhausted && self.queue.is_drained() {
            return Ok((0, 0, DecompressStatus::Done));
        }

        let mut source = SliceSource::new(input);
        let produced = self.read(output, &mut source);

        let status = if produced < output.len() {
            DecompressStatus::Done
        } else {
            DecompressStatus::NeedsOutput
        };
        Ok((source.position(), produced, status))
    }

    fn reset(&mut self) {
        self.init();
    }

    fn is_finished(&self) -> bool {
        self.exhausted && self.queue.is_drained()
    }
}

/// Decompress a whole in-memory `-lz5-` entry.
///
/// Decoding stops when the input runs out; no expected size is checked.
pub fn decode_lz5(data: &[u8]) -> Vec<u8> {
    let mut decoder = Lz5Decoder::default();
    let mut source = SliceSource::new(data);
    let mut output = Vec::with_capacity(data.len() * 2);
    let mut chunk = [0u8; OUTPUT_QUEUE_SIZE * 8];

    loop {
        let n = decoder.read(&mut chunk, &mut source);
        output.extend_from_slice(&chunk[..n]);
        if n < chunk.len() {
            break;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxiarc_core::source::from_fn;

    #[test]
    fn test_for_method() {
        assert!(Lz5Decoder::for_method(b"-lz5-").is_ok());

        let err = Lz5Decoder::for_method(b"-lh5-").unwrap_err();
        assert!(matches!(err, OxiArcError::UnsupportedMethod { .. }));
        assert!(err.to_string().contains("-lh5-"));
    }

    #[test]
    fn test_instance_size_covers_window() {
        assert!(Lz5Decoder::INSTANCE_SIZE >= WINDOW_SIZE + OUTPUT_QUEUE_SIZE);
        assert_eq!(Lz5Decoder::METHOD_ID, b"-lz5-");
    }

    #[test]
    fn test_empty_dest_pulls_nothing() {
        let mut decoder = Lz5Decoder::new();
        let mut source = SliceSource::new(b"\xFFabcdefgh");

        assert_eq!(decoder.read(&mut [], &mut source), 0);
        assert_eq!(source.position(), 0);
        assert!(!decoder.is_exhausted());
    }

    #[test]
    fn test_counters() {
        let mut decoder = Lz5Decoder::new();
        // Literal run, then a run of eight 3-byte copies.
        let input = b"\xFFabcdefgh\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00";
        let mut source = SliceSource::new(input);
        let mut out = [0u8; 64];

        let n = decoder.read(&mut out, &mut source);

        assert_eq!(n, 8 + 24);
        assert_eq!(decoder.total_out(), 32);
        assert_eq!(decoder.total_in(), input.len() as u64);
        assert!(decoder.is_exhausted());
    }

    #[test]
    fn test_no_pull_after_failed_control_byte() {
        let mut pulls = 0;
        let mut source = from_fn(|buf: &mut [u8]| {
            pulls += 1;
            buf.fill(0xFF);
            pulls > 1
        });
        let mut decoder = Lz5Decoder::new();
        let mut out = [0u8; 16];

        assert_eq!(decoder.read(&mut out, &mut source), 0);
        assert!(decoder.is_exhausted());
        assert_eq!(decoder.read(&mut out, &mut source), 0);
        assert_eq!(decoder.total_in(), 0);
        drop(source);
        assert_eq!(pulls, 1);
    }

    #[test]
    fn test_mid_run_failure_ends_stream_within_one_read() {
        // Control byte 0xFF and one literal succeed, the third pull fails,
        // and every later pull would succeed.
        let mut pulls = 0;
        let mut source = from_fn(|buf: &mut [u8]| {
            pulls += 1;
            buf.fill(0xFF);
            pulls != 3
        });
        let mut decoder = Lz5Decoder::new();
        let mut out = [0u8; 32];

        assert_eq!(decoder.read(&mut out, &mut source), 1);
        assert!(decoder.is_exhausted());
        assert_eq!(decoder.read(&mut out, &mut source), 0);
        assert_eq!(decoder.total_in(), 2);
        assert_eq!(decoder.total_out(), 1);
        drop(source);
        assert_eq!(pulls, 3);
    }

    #[test]
    fn test_partial_run_drains_after_failure() {
        // Four literals, then the run is cut short.
        let mut decoder = Lz5Decoder::new();
        let mut source = SliceSource::new(b"\xFFwxyz");
        let mut out = [0u8; 3];

        assert_eq!(decoder.read(&mut out, &mut source), 3);
        assert_eq!(&out, b"wxy");
        assert!(decoder.is_exhausted());
        assert_eq!(decoder.read(&mut out, &mut source), 1);
        assert_eq!(out[0], b'z');
        assert_eq!(decoder.read(&mut out, &mut source), 0);
    }

    #[test]
    fn test_init_restores_starting_state() {
        let mut decoder = Lz5Decoder::new();
        let mut source = SliceSource::new(b"\xFFabcdefgh");
        let mut out = [0u8; 4];
        decoder.read(&mut out, &mut source);

        decoder.init();

        assert_eq!(decoder.history().position(), 0xFEE);
        assert_eq!(decoder.history().byte_at(0xFEE), b' ');
        assert_eq!(decoder.total_in(), 0);
        assert_eq!(decoder.total_out(), 0);
        assert!(decoder.queue.is_drained());
    }

    #[test]
    fn test_decompressor_resume() {
        let input = b"\xFF12345678\xFFabcdefgh";
        let mut decoder = Lz5Decoder::new();
        let mut output = [0u8; 10];

        let (consumed, produced, status) = decoder.decompress(input, &mut output).unwrap();
        assert_eq!(produced, 10);
        assert_eq!(consumed, input.len());
        assert_eq!(status, DecompressStatus::NeedsOutput);
        assert_eq!(&output, b"12345678ab");

        let (consumed, produced, status) =
            decoder.decompress(&input[consumed..], &mut output).unwrap();
        assert_eq!(consumed, 0);
        assert_eq!(produced, 6);
        assert_eq!(status, DecompressStatus::Done);
        assert_eq!(&output[..6], b"cdefgh");
        assert!(decoder.is_finished());

        let (_, produced, status) = decoder.decompress(&[], &mut output).unwrap();
        assert_eq!(produced, 0);
        assert_eq!(status, DecompressStatus::Done);
    }

    #[test]
    fn test_decompress_all_matches_decode_lz5() {
        let input = b"\x7Fhello, \x00\x00world";
        let mut decoder = Lz5Decoder::new();

        let all = decoder.decompress_all(input).unwrap();
        assert_eq!(all, decode_lz5(input));
    }
}
