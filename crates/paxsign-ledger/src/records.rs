//! # Ledger Records — Signees and Signatures
//!
//! The two record kinds persisted in the ledger:
//!
//! - **Signee** — a participant, keyed by email address. Owns at most one
//!   signature, an allow-list of validator emails, and an append-only log
//!   of human-readable validation notes.
//! - **Signature** — an asset, keyed by its name. Carries the owner's
//!   email, the signed artifact's filename, and the SHA-256 fingerprint of
//!   that filename computed at upload time.

use serde::{Deserialize, Serialize};

use paxsign_core::{EmailAddress, SignatureDigest, SignatureName};

use crate::registry::Record;

/// A participant in the signature ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signee {
    /// The participant's email address — the registry key.
    pub email: EmailAddress,
    /// Emails permitted to act as validators for this signee.
    pub allowed_list: Vec<EmailAddress>,
    /// Append-only log of validation notes, newest last.
    pub validation_info: Vec<String>,
    /// The signee's uploaded signature, if any. At most one.
    pub signature: Option<SignatureName>,
}

impl Signee {
    /// A fresh signee with no allow-list entries, notes, or signature.
    pub fn new(email: EmailAddress) -> Self {
        Self {
            email,
            allowed_list: Vec::new(),
            validation_info: Vec::new(),
            signature: None,
        }
    }

    /// Whether `verifier` appears in this signee's allow-list.
    pub fn allows(&self, verifier: &EmailAddress) -> bool {
        self.allowed_list.contains(verifier)
    }
}

impl Record for Signee {
    type Key = EmailAddress;

    fn key(&self) -> &EmailAddress {
        &self.email
    }
}

/// An uploaded signature asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The uploader-chosen registry key.
    pub name: SignatureName,
    /// Email of the owning signee.
    pub owner: EmailAddress,
    /// Filename of the signed artifact.
    pub filename: String,
    /// SHA-256 fingerprint of `filename`, computed at upload time.
    pub digest: SignatureDigest,
}

impl Record for Signature {
    type Key = SignatureName;

    fn key(&self) -> &SignatureName {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(s: &str) -> EmailAddress {
        EmailAddress::new(s).unwrap()
    }

    #[test]
    fn test_new_signee_is_empty() {
        let signee = Signee::new(email("a@pax.example"));
        assert!(signee.allowed_list.is_empty());
        assert!(signee.validation_info.is_empty());
        assert!(signee.signature.is_none());
    }

    #[test]
    fn test_allows_checks_membership() {
        let mut signee = Signee::new(email("owner@pax.example"));
        let validator = email("validator@pax.example");
        assert!(!signee.allows(&validator));
        signee.allowed_list.push(validator.clone());
        assert!(signee.allows(&validator));
    }
}
