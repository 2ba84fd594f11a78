//! `std::io::Read` adapter for entry decoders.

use crate::source::ByteSource;
use crate::traits::EntryDecoder;
use std::io::{self, Read};

/// Owns an [`EntryDecoder`] together with its [`ByteSource`] and exposes the
/// decoded entry as a [`Read`] stream.
///
/// `read` never fails. A return of 0 for a non-empty buffer marks the end of
/// the entry, whether the input ran out cleanly or the source hit an error;
/// ask the source afterwards if the difference matters.
#[derive(Debug)]
pub struct DecoderReader<D, S> {
    decoder: D,
    source: S,
}

impl<D: EntryDecoder, S: ByteSource> DecoderReader<D, S> {
    /// Create a reader with a freshly initialized decoder.
    pub fn new(source: S) -> Self {
        Self::with_decoder(D::new(), source)
    }

    /// Create a reader around an existing decoder.
    pub fn with_decoder(decoder: D, source: S) -> Self {
        Self { decoder, source }
    }

    /// Get a reference to the decoder.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Get a reference to the byte source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the byte source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the reader, returning the decoder and the source.
    pub fn into_parts(self) -> (D, S) {
        (self.decoder, self.source)
    }
}

impl<D: EntryDecoder, S: ByteSource> Read for DecoderReader<D, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.decoder.read(buf, &mut self.source))
    }
}
