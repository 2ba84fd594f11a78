//! # OxiArc Core
//!
//! Core components for the OxiArc archive library.
//!
//! This crate provides the fundamental building blocks for entry decoders:
//!
//! - [`ringbuffer`]: Sliding window buffer for LZSS decompression
//! - [`source`]: Pull-based byte sources feeding a decoder
//! - [`traits`]: The entry decoder descriptor and the streaming decompressor trait
//! - [`reader`]: `std::io::Read` adapter over an entry decoder
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiArc is designed as a layered protocol stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Unified API                                         │
//! │     CLI                                                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ L3: Container                                           │
//! │     Locates entries, supplies their compressed length   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     LArc LZSS (-lz5-)                                   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Building blocks (this crate)                        │
//! │     RingBuffer, ByteSource, EntryDecoder                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiarc_core::source::{ByteSource, SliceSource};
//! use oxiarc_core::RingBuffer;
//!
//! let mut source = SliceSource::new(&[0xAB, 0xCD]);
//! let mut buf = [0u8; 2];
//! assert!(source.pull(&mut buf));
//! assert!(!source.pull(&mut buf));
//!
//! let mut ring = RingBuffer::filled(16, b' ');
//! ring.set_position(15);
//! ring.write_byte(b'x');
//! assert_eq!(ring.position(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod reader;
pub mod ringbuffer;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use error::{OxiArcError, Result};
pub use reader::DecoderReader;
pub use ringbuffer::RingBuffer;
pub use source::{ByteSource, ReadSource, SliceSource};
pub use traits::{DecompressStatus, Decompressor, EntryDecoder};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{OxiArcError, Result};
    pub use crate::reader::DecoderReader;
    pub use crate::ringbuffer::RingBuffer;
    pub use crate::source::{ByteSource, ReadSource, SliceSource};
    pub use crate::traits::{DecompressStatus, Decompressor, EntryDecoder};
}
