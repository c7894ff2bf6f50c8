//! Hex dump source implementation.
//!
//! This module provides a `FrameSource` backed by hex dump text files: one
//! hex-encoded frame per line, with blank lines and `#` comments skipped. It
//! handles file I/O and line decoding, emitting raw frame events for the
//! report pipeline.

pub mod error;
pub mod parser;
pub mod reader;

pub use parser::HexFileSource;
