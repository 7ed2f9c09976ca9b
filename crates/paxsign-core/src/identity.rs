//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the two identifier namespaces of the paxsign ledger.
//! These prevent accidental identifier confusion — you cannot pass a
//! `SignatureName` where an `EmailAddress` is expected, so a signature asset
//! key can never be used to look up a signee participant.
//!
//! Both types serialize as plain strings, which keeps them usable as JSON
//! map keys in the ledger store file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// A signee's email address — the key of a participant record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap an email address.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Empty`] for empty/whitespace input and
    /// [`IdentityError::MalformedEmail`] when the `@` separator is missing.
    /// No further RFC 5321 validation is attempted — the ledger treats the
    /// address as an opaque key with a minimal sanity check.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdentityError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(IdentityError::Empty { kind: "email address" });
        }
        if !raw.contains('@') {
            return Err(IdentityError::MalformedEmail(raw));
        }
        Ok(Self(raw))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A signature asset's registry key, chosen by the uploader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureName(String);

impl SignatureName {
    /// Validate and wrap a signature name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Empty`] for empty/whitespace input.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdentityError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(IdentityError::Empty { kind: "signature name" });
        }
        Ok(Self(raw))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SignatureName {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
