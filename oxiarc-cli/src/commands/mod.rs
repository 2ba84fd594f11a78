//! Command implementations for the OxiArc LZ5 CLI.

pub mod decode;
pub mod info;

pub use decode::{DecodeOptions, cmd_decode};
pub use info::cmd_info;
