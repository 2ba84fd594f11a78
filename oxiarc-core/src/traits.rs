//! Core traits for decoding engines.
//!
//! Two interfaces are offered. [`EntryDecoder`] is the descriptor an archive
//! engine uses to drive a per-entry decoder against a pull-based
//! [`ByteSource`]. [`Decompressor`] is the slice-in/slice-out interface shared
//! by all OxiArc codecs.

use crate::error::Result;
use crate::source::ByteSource;

/// Status of a streaming decompression operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressStatus {
    /// More output buffer space is needed.
    NeedsOutput,
    /// Decompression is complete.
    Done,
}

/// A per-entry decoder selected by an archive engine from the entry's method
/// tag.
///
/// The engine creates one instance per compressed entry and then pulls
/// decoded output in chunks of any size. Run or block boundaries of the
/// underlying format are invisible to the caller.
pub trait EntryDecoder {
    /// The 5-byte method tag found in archive headers, e.g. `-lz5-`.
    const METHOD_ID: &'static [u8; 5];

    /// Memory footprint of one instance, including owned window storage.
    const INSTANCE_SIZE: usize;

    /// Create an instance in its starting state.
    fn new() -> Self
    where
        Self: Sized;

    /// Establish the starting dictionary state. Always succeeds.
    fn init(&mut self);

    /// Fill `dest` with up to `dest.len()` decoded bytes pulled through
    /// `source`, returning how many were written.
    ///
    /// The first failed pull ends the entry: the source is never pulled
    /// again, even if it would succeed later. A return value shorter than
    /// `dest.len()` means the entry is over; every later call returns 0.
    fn read<S: ByteSource + ?Sized>(&mut self, dest: &mut [u8], source: &mut S) -> usize;
}

/// A streaming decompressor (decoder).
///
/// This trait is implemented by all decompression algorithms. It provides a
/// streaming interface that can process data in chunks.
pub trait Decompressor {
    /// Decompress data from input to output.
    ///
    /// # Arguments
    ///
    /// * `input` - Input compressed data
    /// * `output` - Output buffer for decompressed data
    ///
    /// # Returns
    ///
    /// A tuple of (bytes consumed from input, bytes written to output, status)
    fn decompress(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(usize, usize, DecompressStatus)>;

    /// Reset the decompressor to its initial state.
    fn reset(&mut self);

    /// Check if the decompressor has finished.
    fn is_finished(&self) -> bool;

    /// Decompress all data at once (convenience method).
    fn decompress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        let mut input_pos = 0;
        let mut buffer = vec![0u8; 32768];

        loop {
            let (consumed, produced, status) = self.decompress(&input[input_pos..], &mut buffer)?;

            input_pos += consumed;
            output.extend_from_slice(&buffer[..produced]);

            match status {
                DecompressStatus::Done => break,
                DecompressStatus::NeedsOutput => continue,
            }
        }

        Ok(output)
    }
}
