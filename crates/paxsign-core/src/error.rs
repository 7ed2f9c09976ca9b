//! # Error Types — Core Validation Failures
//!
//! Errors raised by the validated constructors in this crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The digest engine and the ledger define their own error enums in their
//! own crates; this module covers only identifier and digest-text parsing.

use thiserror::Error;

/// Rejection of an identifier string by a validated constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Identifier was empty or whitespace-only.
    #[error("{kind} must not be empty")]
    Empty {
        /// Which identifier kind rejected the input.
        kind: &'static str,
    },

    /// Email address is missing the `@` separator.
    #[error("email address {0:?} is missing an '@'")]
    MalformedEmail(String),
}

/// Rejection of a digest hex string by [`crate::SignatureDigest::parse_hex`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestParseError {
    /// Input was not exactly 64 characters.
    #[error("digest must be exactly 64 hex characters, got {0}")]
    BadLength(usize),

    /// Input contained a character outside `0-9a-f`.
    #[error("digest contains non-lowercase-hex character {ch:?} at index {index}")]
    BadCharacter {
        /// The offending character.
        ch: char,
        /// Its byte index in the input.
        index: usize,
    },
}
