//! Loose object decoding
//!
//! - `header_scanner`: parses `<kind> <size>\0` and bounds the payload reader
//! - `object_decoder`: zlib decompression composed with the scanner, reusable
//!   across objects through `reset`

pub mod header_scanner;
pub mod object_decoder;
