//! # Message Padder — Input Encoding and Block Framing
//!
//! Turns an input message into the sequence of 512-bit blocks consumed by
//! the compressor:
//!
//! 1. Append the `1` bit as the byte `0x80`.
//! 2. Append `0x00` bytes until the length is congruent to 56 mod 64.
//! 3. Append the original message's bit length as a 64-bit big-endian
//!    integer.
//! 4. Regroup the padded bytes into 16-word blocks, 32 bits per word,
//!    most-significant byte first.
//!
//! The total padded length is always a multiple of 64 bytes, and the length
//! field always reflects the pre-padding bit count.
//!
//! Text input uses single-byte (Latin-1) semantics: each `char` must have a
//! code point in `[0, 255]`. A code point outside that range is reported as
//! [`DigestError::InvalidInputEncoding`], never silently coerced.

use crate::error::DigestError;

/// One 512-bit chunk of padded input: sixteen big-endian 32-bit words.
pub type Block = [u32; 16];

/// Encode text as single bytes, one per character.
///
/// # Errors
///
/// [`DigestError::InvalidInputEncoding`] for the first character whose code
/// point exceeds 255.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>, DigestError> {
    let mut bytes = Vec::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        let code = u32::from(ch);
        if code > 0xff {
            return Err(DigestError::InvalidInputEncoding { ch, index, code });
        }
        bytes.push(code as u8);
    }
    Ok(bytes)
}

/// Pad a message and frame it into 512-bit blocks.
///
/// The result is never empty: an empty message pads to exactly one block.
pub fn pad(message: &[u8]) -> Vec<Block> {
    let bit_len = (message.len() as u64) * 8;

    let mut padded = Vec::with_capacity(message.len() + 72);
    padded.extend_from_slice(message);
    padded.push(0x80);
    while padded.len() % 64 != 56 {
        padded.push(0x00);
    }
    padded.extend_from_slice(&bit_len.to_be_bytes());

    padded
        .chunks_exact(64)
        .map(|chunk| {
            let mut block = [0u32; 16];
            for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(4)) {
                *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            }
            block
        })
        .collect()
}
