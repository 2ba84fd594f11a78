//! Error types for OxiArc operations.
//!
//! Decoding engines themselves never fail: a byte source that runs dry simply
//! ends the entry. Errors only arise in the layers around the engine, such as
//! selecting a decoder by method tag or performing the surrounding file I/O.

use std::io;
use thiserror::Error;

/// The main error type for OxiArc operations.
#[derive(Debug, Error)]
pub enum OxiArcError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported compression method.
    #[error("Unsupported compression method: {method}")]
    UnsupportedMethod {
        /// The compression method identifier.
        method: String,
    },
}

/// Result type alias for OxiArc operations.
pub type Result<T> = std::result::Result<T, OxiArcError>;

impl OxiArcError {
    /// Create an unsupported method error.
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Create an unsupported method error from a raw method tag.
    ///
    /// Non-UTF-8 bytes are replaced so the tag can always be displayed.
    pub fn unsupported_method_id(id: &[u8]) -> Self {
        Self::unsupported_method(String::from_utf8_lossy(id))
    }
}
