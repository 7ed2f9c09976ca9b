//! # paxsign-crypto — The Digest Engine
//!
//! A self-contained SHA-256 implementation used to fingerprint signature
//! filenames, built from four stages:
//!
//! - **Constant generation** (`constants`): H and K tables derived from the
//!   first 64 primes, computed once per process and cached.
//! - **Message padding** (`padding`): 0x80 marker, zero fill, 64-bit
//!   big-endian length field, big-endian 16-word block framing.
//! - **Block compression** (`compress`): 64-word schedule expansion and the
//!   64-round compression function, blocks chained strictly in order.
//! - **Digest formatting**: the final 8 words sealed into
//!   [`SignatureDigest`] (64 lowercase hex characters).
//!
//! ## Scope
//!
//! Single-shot input to digest only. No streaming API, no HMAC or other
//! keyed variants, no constant-time hardening — the digests here
//! fingerprint public filenames, not secrets.
//!
//! ## Crate Policy
//!
//! - Depends only on `paxsign-core` internally.
//! - No `unsafe` code.
//! - The `sha2` crate appears only as a dev-dependency, as an independent
//!   oracle for the engine's output. Production digests always come from
//!   this implementation.

pub mod compress;
pub mod constants;
pub mod error;
pub mod padding;

pub use constants::{constants, Sha256Constants};
pub use error::DigestError;
pub use paxsign_core::SignatureDigest;

/// Compute the SHA-256 digest of `text` under single-byte semantics.
///
/// Every character must have a code point in `[0, 255]`; each becomes one
/// message byte. This matches how the ledger fingerprints filenames.
///
/// # Errors
///
/// [`DigestError::InvalidInputEncoding`] if any character is wider than one
/// byte. No partial digest escapes on failure.
pub fn compute_sha256(text: &str) -> Result<SignatureDigest, DigestError> {
    let bytes = padding::encode_latin1(text)?;
    Ok(sha256_bytes(&bytes))
}

/// Compute the SHA-256 digest of raw bytes. Infallible — every byte
/// sequence is a valid message.
pub fn sha256_bytes(data: &[u8]) -> SignatureDigest {
    let tables = constants();
    let blocks = padding::pad(data);
    let words = compress::compress(&blocks, tables.h, &tables.k);
    SignatureDigest::from_words(words)
}

/// Convenience wrapper: SHA-256 of raw bytes as a 64-character hex string.
pub fn sha256_hex_bytes(data: &[u8]) -> String {
    sha256_bytes(data).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_vector() {
        assert_eq!(
            compute_sha256("").unwrap().to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_abc_vector() {
        assert_eq!(
            compute_sha256("abc").unwrap().to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_text_and_byte_paths_agree() {
        let digest = compute_sha256("signature.pdf").unwrap();
        assert_eq!(digest, sha256_bytes(b"signature.pdf"));
        assert_eq!(digest.to_hex(), sha256_hex_bytes(b"signature.pdf"));
    }

    #[test]
    fn test_wide_character_is_rejected() {
        let err = compute_sha256("契約書.pdf").unwrap_err();
        assert!(matches!(err, DigestError::InvalidInputEncoding { index: 0, .. }));
    }
}
