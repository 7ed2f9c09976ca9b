//! # Digest Engine Errors
//!
//! The engine has a single failure mode: input text containing a character
//! that does not fit in one byte. Everything past input encoding is pure
//! arithmetic with no error path.

use thiserror::Error;

/// Failure of a digest computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Input contained a character whose code point exceeds 255 and
    /// therefore has no single-byte representation. The engine reports
    /// this explicitly rather than coercing or truncating the value.
    #[error("character {ch:?} at index {index} has no single-byte encoding (code point {code:#06x} > 0xff)")]
    InvalidInputEncoding {
        /// The offending character.
        ch: char,
        /// Its character index in the input text.
        index: usize,
        /// Its Unicode code point.
        code: u32,
    },
}
