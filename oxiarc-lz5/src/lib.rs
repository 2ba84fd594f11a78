//! # OxiArc LZ5
//!
//! Pure Rust decoder for the LArc `-lz5-` method, a plain LZSS scheme also
//! understood by LHA.
//!
//! The compressed stream is a sequence of *runs*. Each run is a control byte
//! whose eight bits (least significant first) select either a literal byte or
//! a two-byte copy command. Copies address a 4 KB window by absolute index;
//! the window starts out filled with spaces, with the write cursor 18 bytes
//! before its end.
//!
//! - [`history`]: the circular window
//! - [`queue`]: the per-run output queue
//! - [`run`]: decoding of one run
//! - [`decoder`]: the streaming [`Lz5Decoder`]
//!
//! ## Example
//!
//! ```rust
//! use oxiarc_lz5::decode_lz5;
//!
//! // Seven literals, then copy 3 bytes starting at window index 0xFEE.
//! let data = b"\x7Fabc-xyz\xEE\xF0";
//! assert_eq!(decode_lz5(data), b"abc-xyzabc");
//! ```
//!
//! ## Streaming Decompression
//!
//! Any [`ByteSource`](oxiarc_core::ByteSource) can feed the decoder, and
//! [`Lz5Reader`] turns the pair into a `std::io::Read`:
//!
//! ```rust
//! use oxiarc_core::ReadSource;
//! use oxiarc_lz5::Lz5Reader;
//! use std::io::{Cursor, Read};
//!
//! let compressed = Cursor::new(b"\xFFhi there".to_vec());
//! let mut reader = Lz5Reader::new(ReadSource::new(compressed));
//!
//! let mut text = String::new();
//! reader.read_to_string(&mut text).expect("decoding never fails");
//! assert_eq!(text, "hi there");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
pub mod decoder;
pub mod history;
pub mod queue;
pub mod run;

// Re-exports
pub use decoder::{Lz5Decoder, decode_lz5};
pub use history::HistoryBuffer;
pub use queue::OutputQueue;
pub use run::{Command, decode_run};

/// A `std::io::Read` over a `-lz5-` entry pulled from `S`.
pub type Lz5Reader<S> = oxiarc_core::DecoderReader<Lz5Decoder, S>;
