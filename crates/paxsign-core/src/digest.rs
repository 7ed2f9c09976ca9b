//! # Signature Digest — Hex-Rendered SHA-256 Output
//!
//! Defines `SignatureDigest`, the 32-byte fingerprint stored in signature
//! records and compared during validation.
//!
//! ## Invariant
//!
//! The inner bytes are private. A digest is constructed either from the
//! 8 final 32-bit words of a SHA-256 computation ([`SignatureDigest::from_words`],
//! big-endian serialization) or by parsing a canonical 64-character lowercase
//! hex string ([`SignatureDigest::parse_hex`]). Rendering is always canonical,
//! so digest equality and hex-string equality coincide.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DigestParseError;

/// A SHA-256 digest as stored in the ledger: 32 bytes, rendered as exactly
/// 64 lowercase hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureDigest([u8; 32]);

impl SignatureDigest {
    /// Serialize the 8 final hash words into a digest, most-significant
    /// byte of each word first.
    pub fn from_words(words: [u32; 8]) -> Self {
        let mut bytes = [0u8; 32];
        for (i, word) in words.iter().enumerate() {
            bytes[i * 4..][..4].copy_from_slice(&word.to_be_bytes());
        }
        Self(bytes)
    }

    /// The raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a 64-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a canonical 64-character lowercase hex string.
    ///
    /// Uppercase digits are rejected — there is exactly one textual form
    /// per digest, so stored digests can be compared byte-for-byte.
    ///
    /// # Errors
    ///
    /// [`DigestParseError::BadLength`] for inputs that are not 64 characters;
    /// [`DigestParseError::BadCharacter`] for anything outside `0-9a-f`.
    pub fn parse_hex(hex: &str) -> Result<Self, DigestParseError> {
        if hex.len() != 64 {
            return Err(DigestParseError::BadLength(hex.len()));
        }
        for (index, ch) in hex.char_indices() {
            if !matches!(ch, '0'..='9' | 'a'..='f') {
                return Err(DigestParseError::BadCharacter { ch, index });
            }
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            // Length and charset were checked above.
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| DigestParseError::BadLength(hex.len()))?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for SignatureDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for SignatureDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SignatureDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::parse_hex(&hex).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_is_big_endian() {
        let digest = SignatureDigest::from_words([
            0x01234567, 0x89abcdef, 0, 0, 0, 0, 0, 0xdeadbeef,
        ]);
        let hex = digest.to_hex();
        assert!(hex.starts_with("0123456789abcdef"));
        assert!(hex.ends_with("deadbeef"));
        assert_eq!(hex.len(), 64);
    }

    #[test]
    fn test_parse_hex_round_trip() {
        let digest = SignatureDigest::from_words([7; 8]);
        let parsed = SignatureDigest::parse_hex(&digest.to_hex()).unwrap();
        assert_eq!(parsed, digest);
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert_eq!(
            SignatureDigest::parse_hex("abc"),
            Err(DigestParseError::BadLength(3))
        );
        let upper = "A".repeat(64);
        assert_eq!(
            SignatureDigest::parse_hex(&upper),
            Err(DigestParseError::BadCharacter { ch: 'A', index: 0 })
        );
    }

    #[test]
    fn test_serde_as_hex_string() {
        let digest = SignatureDigest::from_words([0u32; 8]);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", "0".repeat(64)));
        let back: SignatureDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
