//! # Ledger Errors
//!
//! Transaction failures. Registry misses and duplicates convert in via
//! `#[from]`; a digest engine failure aborts the transaction that triggered
//! it — no record is persisted with a missing or coerced fingerprint.

use thiserror::Error;

use paxsign_core::EmailAddress;
use paxsign_crypto::DigestError;

use crate::registry::RegistryError;

/// Failure of a ledger transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The calling identity is not a registered signee.
    #[error("caller {0} is not a registered signee")]
    UnknownCaller(EmailAddress),

    /// A registry operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The digest engine rejected the input.
    #[error("digest computation failed: {0}")]
    Digest(#[from] DigestError),
}
