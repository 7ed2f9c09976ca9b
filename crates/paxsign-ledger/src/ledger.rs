//! # Ledger Transactions
//!
//! The signature notarization flows, written against the keyed registry
//! contract:
//!
//! - **upload_signature** — fingerprint a filename with the digest engine
//!   and persist the signature asset under the caller's ownership.
//! - **add_to_allowed_list** — permit another signee to validate for the
//!   caller.
//! - **validate_signature** — recompute the fingerprint of an owner's
//!   signature filename, compare byte-for-byte against the stored digest,
//!   and append a human-readable note to the caller's record.
//!
//! Missing owners or signatures during validation are recorded as notes on
//! the validator's record and reported in the returned outcome; a digest
//! engine failure is a hard error and aborts the transaction before any
//! registry write.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use paxsign_core::{EmailAddress, SignatureDigest, SignatureName};
use paxsign_crypto::compute_sha256;

use crate::error::LedgerError;
use crate::records::{Signature, Signee};
use crate::registry::{InMemoryRegistry, Registry};

/// Outcome of a [`Ledger::validate_signature`] transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// Recomputed fingerprint matched the stored digest.
    Verified,
    /// Recomputed fingerprint did not match the stored digest.
    NotVerified,
    /// The named owner is not a registered signee.
    MissingOwner,
    /// The owner exists but has no uploaded signature.
    MissingSignature,
}

impl ValidationOutcome {
    /// Whether the owner's signature was verified.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

/// The signature ledger: a signee participant registry and a signature
/// asset registry, plus the transactions that operate on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    signees: InMemoryRegistry<EmailAddress, Signee>,
    signatures: InMemoryRegistry<SignatureName, Signature>,
}

impl Ledger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self {
            signees: InMemoryRegistry::new("signee"),
            signatures: InMemoryRegistry::new("signature"),
        }
    }

    /// Re-tag registry names after deserialization from a store file.
    pub fn retag(&mut self) {
        self.signees.set_name("signee");
        self.signatures.set_name("signature");
    }

    /// Register a new signee participant.
    pub fn register_signee(&mut self, email: EmailAddress) -> Result<(), LedgerError> {
        info!(signee = %email, "registering signee");
        self.signees.add(Signee::new(email))?;
        Ok(())
    }

    /// Look up a signee by email.
    pub fn signee(&self, email: &EmailAddress) -> Option<&Signee> {
        self.signees.get(email)
    }

    /// Look up a signature asset by name.
    pub fn signature(&self, name: &SignatureName) -> Option<&Signature> {
        self.signatures.get(name)
    }

    /// All signees, in key order.
    pub fn signees(&self) -> impl Iterator<Item = &Signee> {
        self.signees.iter()
    }

    /// Whether `owner`'s allow-list contains `verifier`.
    pub fn check_allowed(
        &self,
        verifier: &EmailAddress,
        owner: &EmailAddress,
    ) -> Result<bool, LedgerError> {
        let owner = self
            .signees
            .get(owner)
            .ok_or_else(|| LedgerError::UnknownCaller(owner.clone()))?;
        Ok(owner.allows(verifier))
    }

    /// Fingerprint `filename` and persist a signature asset owned by the
    /// caller, then point the caller's record at it.
    ///
    /// # Errors
    ///
    /// Fails if the caller is unregistered, the signature name is taken, or
    /// the filename has no single-byte encoding. Nothing is persisted on
    /// failure.
    pub fn upload_signature(
        &mut self,
        caller: &EmailAddress,
        name: SignatureName,
        filename: String,
    ) -> Result<SignatureDigest, LedgerError> {
        let mut owner = self.caller(caller)?.clone();

        // Compute the fingerprint before touching either registry so an
        // encoding failure leaves the ledger untouched.
        let digest = compute_sha256(&filename)?;
        info!(caller = %caller, name = %name, %digest, "uploading signature");

        self.signatures.add(Signature {
            name: name.clone(),
            owner: caller.clone(),
            filename,
            digest,
        })?;

        owner.signature = Some(name);
        self.signees.update(owner)?;
        Ok(digest)
    }

    /// Append `validator` to the caller's allow-list.
    pub fn add_to_allowed_list(
        &mut self,
        caller: &EmailAddress,
        validator: EmailAddress,
    ) -> Result<(), LedgerError> {
        let mut owner = self.caller(caller)?.clone();
        debug!(caller = %caller, validator = %validator, "extending allow-list");
        owner.allowed_list.push(validator);
        self.signees.update(owner)?;
        Ok(())
    }

    /// Recompute the fingerprint of `owner_email`'s signature filename and
    /// compare it byte-for-byte against the stored digest. Notes describing
    /// the outcome are appended to the caller's `validation_info`.
    ///
    /// A missing owner or signature is not an error — it is recorded as a
    /// note and reflected in the outcome, matching the ledger's append-only
    /// audit trail. A digest engine failure aborts without writing.
    pub fn validate_signature(
        &mut self,
        caller: &EmailAddress,
        owner_email: &EmailAddress,
    ) -> Result<ValidationOutcome, LedgerError> {
        let mut validator = self.caller(caller)?.clone();

        let Some(owner) = self.signees.get(owner_email).cloned() else {
            warn!(caller = %caller, owner = %owner_email, "validation target not registered");
            validator
                .validation_info
                .push(format!("signee {owner_email} not found"));
            self.signees.update(validator)?;
            return Ok(ValidationOutcome::MissingOwner);
        };

        validator.validation_info.push(format!("Email: {}", owner.email));

        let outcome = match owner.signature.as_ref().and_then(|n| self.signatures.get(n)) {
            None => {
                validator
                    .validation_info
                    .push(format!("{} has no uploaded signature", owner.email));
                ValidationOutcome::MissingSignature
            }
            Some(signature) => {
                let recomputed = compute_sha256(&signature.filename)?;
                if recomputed == signature.digest {
                    validator
                        .validation_info
                        .push(format!("{} verified", owner.email));
                    ValidationOutcome::Verified
                } else {
                    validator.validation_info.push(format!(
                        "{} is not verified filename: {} SHA256: {}",
                        owner.email, signature.filename, signature.digest
                    ));
                    ValidationOutcome::NotVerified
                }
            }
        };

        info!(caller = %caller, owner = %owner_email, ?outcome, "validated signature");
        self.signees.update(validator)?;
        Ok(outcome)
    }

    /// Resolve the calling identity against the signee registry.
    fn caller(&self, email: &EmailAddress) -> Result<&Signee, LedgerError> {
        self.signees
            .get(email)
            .ok_or_else(|| LedgerError::UnknownCaller(email.clone()))
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(s: &str) -> EmailAddress {
        EmailAddress::new(s).unwrap()
    }

    fn name(s: &str) -> SignatureName {
        SignatureName::new(s).unwrap()
    }

    fn ledger_with(owner: &str) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.register_signee(email(owner)).unwrap();
        ledger
    }

    #[test]
    fn test_upload_stores_digest_and_owner_link() {
        let mut ledger = ledger_with("owner@pax.example");
        let digest = ledger
            .upload_signature(&email("owner@pax.example"), name("deed"), "deed.pdf".into())
            .unwrap();

        let signature = ledger.signature(&name("deed")).unwrap();
        assert_eq!(signature.digest, digest);
        assert_eq!(signature.owner, email("owner@pax.example"));
        assert_eq!(
            ledger.signee(&email("owner@pax.example")).unwrap().signature,
            Some(name("deed"))
        );
    }

    #[test]
    fn test_upload_rejects_unknown_caller() {
        let mut ledger = Ledger::new();
        let err = ledger
            .upload_signature(&email("ghost@pax.example"), name("x"), "x.pdf".into())
            .unwrap_err();
        assert!(matches!(err, LedgerError::UnknownCaller(_)));
    }

    #[test]
    fn test_upload_encoding_failure_leaves_ledger_untouched() {
        let mut ledger = ledger_with("owner@pax.example");
        let err = ledger
            .upload_signature(&email("owner@pax.example"), name("deed"), "契約.pdf".into())
            .unwrap_err();
        assert!(matches!(err, LedgerError::Digest(_)));
        assert!(ledger.signature(&name("deed")).is_none());
        assert!(ledger.signee(&email("owner@pax.example")).unwrap().signature.is_none());
    }

    #[test]
    fn test_validate_verified_round_trip() {
        let mut ledger = ledger_with("owner@pax.example");
        ledger.register_signee(email("validator@pax.example")).unwrap();
        ledger
            .upload_signature(&email("owner@pax.example"), name("deed"), "deed.pdf".into())
            .unwrap();

        let outcome = ledger
            .validate_signature(&email("validator@pax.example"), &email("owner@pax.example"))
            .unwrap();
        assert!(outcome.is_verified());

        let notes = &ledger.signee(&email("validator@pax.example")).unwrap().validation_info;
        assert_eq!(notes[0], "Email: owner@pax.example");
        assert_eq!(notes[1], "owner@pax.example verified");
    }

    #[test]
    fn test_validate_missing_owner_is_noted_not_fatal() {
        let mut ledger = ledger_with("validator@pax.example");
        let outcome = ledger
            .validate_signature(&email("validator@pax.example"), &email("ghost@pax.example"))
            .unwrap();
        assert_eq!(outcome, ValidationOutcome::MissingOwner);
        let notes = &ledger.signee(&email("validator@pax.example")).unwrap().validation_info;
        assert_eq!(notes, &vec!["signee ghost@pax.example not found".to_string()]);
    }

    #[test]
    fn test_validate_missing_signature_is_noted() {
        let mut ledger = ledger_with("owner@pax.example");
        ledger.register_signee(email("validator@pax.example")).unwrap();
        let outcome = ledger
            .validate_signature(&email("validator@pax.example"), &email("owner@pax.example"))
            .unwrap();
        assert_eq!(outcome, ValidationOutcome::MissingSignature);
    }

    #[test]
    fn test_allow_list_check() {
        let mut ledger = ledger_with("owner@pax.example");
        let validator = email("validator@pax.example");
        assert!(!ledger.check_allowed(&validator, &email("owner@pax.example")).unwrap());
        ledger
            .add_to_allowed_list(&email("owner@pax.example"), validator.clone())
            .unwrap();
        assert!(ledger.check_allowed(&validator, &email("owner@pax.example")).unwrap());
    }
}
