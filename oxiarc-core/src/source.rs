//! Pull-based byte sources for entry decoders.
//!
//! A decoder never sees the archive container. It asks a [`ByteSource`] for an
//! exact number of compressed bytes at a time, and the source either delivers
//! all of them or reports failure. End of entry and I/O failure look the same
//! from the decoder's side; callers that need to tell them apart can inspect
//! the source afterwards (see [`ReadSource::take_error`]).

use std::io::{self, Read};

/// The capability to pull compressed input on demand.
///
/// `pull` fills the whole of `buf` and returns `true`, or returns `false`
/// if that is not possible. There are no partial fills: after a `false`
/// return the contents of `buf` are unspecified.
pub trait ByteSource {
    /// Fill `buf` completely, or report failure.
    fn pull(&mut self, buf: &mut [u8]) -> bool;

    /// Pull a single byte.
    fn pull_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        self.pull(&mut byte).then_some(byte[0])
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn pull(&mut self, buf: &mut [u8]) -> bool {
        (**self).pull(buf)
    }
}

/// Create a callback-style source from a closure with the
/// [`ByteSource::pull`] contract.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(&mut [u8]) -> bool,
{
    FromFn(f)
}

/// A byte source backed by a closure. See [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

impl<F> ByteSource for FromFn<F>
where
    F: FnMut(&mut [u8]) -> bool,
{
    fn pull(&mut self, buf: &mut [u8]) -> bool {
        (self.0)(buf)
    }
}

/// A byte source over an in-memory slice.
///
/// A request larger than the remaining input fails without consuming
/// anything, so the source stays exhausted once it has failed.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a source that yields `data` from the beginning.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes handed out so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet pulled.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn pull(&mut self, buf: &mut [u8]) -> bool {
        let Some(chunk) = self.data.get(self.pos..self.pos + buf.len()) else {
            return false;
        };
        buf.copy_from_slice(chunk);
        self.pos += buf.len();
        true
    }
}

/// A byte source over any [`Read`] implementation.
///
/// Each pull is a `read_exact`. A short read at end of input counts as
/// exhaustion; any other I/O error is retained so the caller can report it
/// once decoding has stopped.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    bytes_read: u64,
    error: Option<io::Error>,
}

impl<R: Read> ReadSource<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bytes_read: 0,
            error: None,
        }
    }

    /// Total bytes successfully pulled.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Take the I/O error that ended the stream, if it was not a plain EOF.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Get a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the source, returning the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn pull(&mut self, buf: &mut [u8]) -> bool {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.bytes_read += buf.len() as u64;
                true
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => false,
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }
}
